//! CompositionRoot - Dependency Injection Container
//!
//! This module wires together all the dependencies for the application.
//! Launcher scanners are registered here explicitly; nothing registers itself.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::adapters::gateways::{DesktopEntryGateway, FileUsageGateway, HeroicGateway};
use crate::application::services::{AppCatalog, FavoritesManager, LauncherRegistry};
use crate::application::use_cases::DiscoverEntriesUseCase;
use crate::domain::errors::DomainError;
use crate::infrastructure::filesystem::{self, AppDirs};
use crate::shared::config::Config;

/// Application composition root - owns all dependencies
pub struct CompositionRoot {
    pub catalog: AppCatalog,
    pub launchers: Arc<LauncherRegistry>,
    pub config: Config,
}

impl CompositionRoot {
    /// Create a composition root for a loaded configuration
    pub fn new(config: Config) -> Result<Self, DomainError> {
        Self::with_config(CompositionConfig {
            config,
            ..CompositionConfig::default()
        })
    }

    /// Create with custom configuration
    ///
    /// Fails only when favorites are enabled and their store cannot be set up.
    pub fn with_config(composition: CompositionConfig) -> Result<Self, DomainError> {
        let CompositionConfig {
            config,
            dirs,
            search_paths,
        } = composition;

        let launchers = Arc::new(LauncherRegistry::new());
        register_launchers(&launchers, &config, &dirs);

        let roots = search_paths.unwrap_or_else(|| {
            filesystem::default_search_paths(&config.application.extra_search_paths)
        });
        debug!(count = roots.len(), "Resolved search locations");

        let discovery = DiscoverEntriesUseCase::new(
            Box::new(DesktopEntryGateway::new(roots)),
            Arc::clone(&launchers),
        )
        .with_launchers_enabled(config.application.scan_game_launchers);

        let favorites = build_favorites(&config, &dirs)?;
        let catalog = AppCatalog::new(discovery, Arc::new(favorites));

        Ok(Self {
            catalog,
            launchers,
            config,
        })
    }
}

/// Register every launcher scanner enabled in the configuration
pub fn register_launchers(registry: &LauncherRegistry, config: &Config, dirs: &AppDirs) {
    let heroic = &config.launchers.heroic;
    if heroic.enabled {
        if let Some(dir) = heroic.config_dir.clone().or_else(|| dirs.heroic_config_dir()) {
            registry.register(Arc::new(HeroicGateway::new(dir)));
        }
    }
    info!(launchers = ?registry.list(), "Registered launchers");
}

fn build_favorites(config: &Config, dirs: &AppDirs) -> Result<FavoritesManager, DomainError> {
    if !config.application.enable_favorites {
        return Ok(FavoritesManager::disabled());
    }

    let path = config
        .application
        .favorites_path
        .clone()
        .or_else(|| dirs.favorites_path())
        .ok_or_else(|| DomainError::Setup("no cache directory for favorites".to_string()))?;

    let gateway = FileUsageGateway::open(path)?;
    Ok(FavoritesManager::new(Arc::new(gateway)))
}

/// Configuration for the composition root
#[derive(Clone, Debug, Default)]
pub struct CompositionConfig {
    pub config: Config,
    /// Cache and config directories
    pub dirs: AppDirs,
    /// Desktop entry roots; the standard existing locations when absent
    pub search_paths: Option<Vec<PathBuf>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AppType;
    use std::fs;
    use tempfile::TempDir;

    fn composition(tmp: &TempDir) -> CompositionConfig {
        let apps = tmp.path().join("apps");
        fs::create_dir_all(&apps).unwrap();
        fs::write(
            apps.join("gimp.desktop"),
            "[Desktop Entry]\nType=Application\nName=Gimp\nExec=gimp %f\n",
        )
        .unwrap();

        let heroic = tmp.path().join("config").join("heroic").join("sideload_apps");
        fs::create_dir_all(&heroic).unwrap();
        fs::write(
            heroic.join("library.json"),
            r#"{"games": [{"runner": "sideload", "app_name": "abc", "title": "Celeste", "folder_name": "c", "is_installed": true}]}"#,
        )
        .unwrap();

        CompositionConfig {
            config: Config::default(),
            dirs: AppDirs::with_dirs(tmp.path().join("cache"), tmp.path().join("config")),
            search_paths: Some(vec![apps]),
        }
    }

    #[test]
    fn test_wires_desktop_and_heroic_sources() {
        let tmp = TempDir::new().unwrap();
        let mut root = CompositionRoot::with_config(composition(&tmp)).unwrap();

        assert_eq!(root.launchers.list(), vec!["heroic"]);

        root.catalog.scan().unwrap();
        assert_eq!(root.catalog.count(), 2);
        assert_eq!(root.catalog.entries_by_type(AppType::Game)[0].name, "Celeste");
        assert!(!root.catalog.favorites().is_enabled());
    }

    #[test]
    fn test_launcher_scanning_toggle() {
        let tmp = TempDir::new().unwrap();
        let mut composition = composition(&tmp);
        composition.config.application.scan_game_launchers = false;

        let mut root = CompositionRoot::with_config(composition).unwrap();
        root.catalog.scan().unwrap();

        assert_eq!(root.catalog.count(), 1);
    }

    #[test]
    fn test_heroic_can_be_disabled() {
        let tmp = TempDir::new().unwrap();
        let mut composition = composition(&tmp);
        composition.config.launchers.heroic.enabled = false;

        let root = CompositionRoot::with_config(composition).unwrap();

        assert_eq!(root.launchers.count(), 0);
    }

    #[test]
    fn test_favorites_store_created_when_enabled() {
        let tmp = TempDir::new().unwrap();
        let mut composition = composition(&tmp);
        composition.config.application.enable_favorites = true;

        let root = CompositionRoot::with_config(composition).unwrap();

        assert!(root.catalog.favorites().is_enabled());
        assert!(tmp.path().join("cache").join("kestrel").is_dir());
    }

    #[test]
    fn test_favorites_setup_failure_is_surfaced() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let mut composition = composition(&tmp);
        composition.config.application.enable_favorites = true;
        composition.config.application.favorites_path = Some(blocker.join("favorites.json"));

        let result = CompositionRoot::with_config(composition);
        assert!(matches!(result, Err(DomainError::Setup(_))));
    }
}
