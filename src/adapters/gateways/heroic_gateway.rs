//! HeroicGateway - Heroic Games Launcher sideload catalog scanner

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::entities::Entry;
use crate::domain::errors::DomainError;
use crate::domain::repositories::LauncherScanner;

/// Registry name of this scanner
pub const HEROIC_LAUNCHER: &str = "heroic";

const SIDELOAD_RUNNER: &str = "sideload";
const GAME_ICON: &str = "applications-games";

/// Raw library; games are decoded one at a time in `scan`
#[derive(Debug, Default, Deserialize)]
struct Library {
    #[serde(default)]
    games: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Game {
    #[serde(default, deserialize_with = "null_as_default")]
    runner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    app_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    folder_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    is_installed: bool,
}

/// Heroic writes `null` for unset fields; read it as the empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
struct GameConfig {
    #[serde(default)]
    categories: Vec<String>,
}

/// Scans installed sideloaded games from a Heroic configuration directory
#[derive(Clone, Debug)]
pub struct HeroicGateway {
    config_dir: PathBuf,
}

impl HeroicGateway {
    /// Create a scanner over an explicit Heroic config directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Scanner over `<config_dir>/heroic`, if a config directory is known
    pub fn from_default() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("heroic")))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn library_path(&self) -> PathBuf {
        self.config_dir.join("sideload_apps").join("library.json")
    }

    fn read_library(&self) -> Result<Option<Library>, DomainError> {
        let path = self.library_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            // Heroic not installed
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(DomainError::source_failure(HEROIC_LAUNCHER, err)),
        };

        serde_json::from_str(&content).map(Some).map_err(|err| {
            DomainError::source_failure(HEROIC_LAUNCHER, format!("parsing library: {err}"))
        })
    }

    fn entry_for(&self, game: &Game) -> Entry {
        let categories = self
            .game_categories(&game.app_name)
            .unwrap_or_else(|| vec!["Game".to_string()]);

        Entry::new(
            game.title.clone(),
            format!("xdg-open heroic://launch/sideload/{}", game.app_name),
            format!("heroic-sideload-{}", game.app_name),
        )
        .with_comment(format!("Heroic Game: {}", game.folder_name))
        .with_icon(GAME_ICON)
        .with_categories(categories)
    }

    /// Categories from `GamesConfig/<app>.json`, if any are declared
    ///
    /// Keys are visited in sorted order; `version` and `explicit` are metadata.
    fn game_categories(&self, app_name: &str) -> Option<Vec<String>> {
        let path = self.config_dir.join("GamesConfig").join(format!("{app_name}.json"));
        let content = fs::read_to_string(path).ok()?;
        let config: Map<String, Value> = serde_json::from_str(&content).ok()?;

        config
            .into_iter()
            .filter(|(key, _)| key != "version" && key != "explicit")
            .filter_map(|(_, value)| serde_json::from_value::<GameConfig>(value).ok())
            .map(|game_config| game_config.categories)
            .find(|categories| !categories.is_empty())
    }
}

impl LauncherScanner for HeroicGateway {
    fn name(&self) -> &str {
        HEROIC_LAUNCHER
    }

    fn scan(&self) -> Result<Vec<Entry>, DomainError> {
        let Some(library) = self.read_library()? else {
            debug!(path = %self.library_path().display(), "No Heroic sideload library");
            return Ok(Vec::new());
        };

        let entries = library
            .games
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Game>(value) {
                Ok(game) => Some(game),
                Err(err) => {
                    debug!(error = %err, "Skipping malformed Heroic game");
                    None
                }
            })
            .filter(|game| game.is_installed && game.runner == SIDELOAD_RUNNER)
            .map(|game| self.entry_for(&game))
            .filter(|entry| entry.validate().is_ok())
            .collect();

        Ok(entries)
    }
}
