//! FileSystem infrastructure - standard locations on this machine

use std::path::{Path, PathBuf};

use crate::domain::value_objects::UserProfile;

/// Directory name used under the cache and config directories
pub const APP_DIR: &str = "kestrel";

/// Per-user directories the launcher reads and writes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppDirs {
    cache_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

impl AppDirs {
    /// Resolve the platform cache and config directories
    pub fn new() -> Self {
        Self {
            cache_dir: dirs::cache_dir(),
            config_dir: dirs::config_dir(),
        }
    }

    /// Create with custom directories
    pub fn with_dirs(cache_dir: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            cache_dir: Some(cache_dir),
            config_dir: Some(config_dir),
        }
    }

    /// Default favorites file, `<cache>/kestrel/favorites.json`
    pub fn favorites_path(&self) -> Option<PathBuf> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join(APP_DIR).join("favorites.json"))
    }

    /// Default Heroic configuration directory, `<config>/heroic`
    pub fn heroic_config_dir(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join("heroic"))
    }
}

impl Default for AppDirs {
    fn default() -> Self {
        Self::new()
    }
}

/// Desktop entry roots in priority order, before existence filtering
pub fn desktop_search_paths(
    profile: &UserProfile,
    xdg_data_dirs: Option<&str>,
    extra: &[PathBuf],
) -> Vec<PathBuf> {
    let home = Path::new(&profile.home);
    let mut paths = vec![
        PathBuf::from("/usr/share/applications"),
        PathBuf::from("/usr/local/share/applications"),
        home.join(".local/share/applications"),
        PathBuf::from("/var/lib/flatpak/exports/share/applications"),
        home.join(".local/share/flatpak/exports/share/applications"),
        PathBuf::from("/run/current-system/sw/share/applications"),
        PathBuf::from("/nix/var/nix/profiles/default/share/applications"),
        home.join(".nix-profile/share/applications"),
        home.join(".local/state/nix/profiles/profile/share/applications"),
        PathBuf::from(format!("/etc/profiles/per-user/{}/share/applications", profile.user)),
    ];

    if let Some(dirs) = xdg_data_dirs {
        paths.extend(
            dirs.split(':')
                .filter(|dir| !dir.is_empty())
                .map(|dir| Path::new(dir).join("applications")),
        );
    }

    paths.extend(extra.iter().cloned());
    paths
}

/// Search paths for the running process, keeping only existing directories
pub fn default_search_paths(extra: &[PathBuf]) -> Vec<PathBuf> {
    let xdg = std::env::var("XDG_DATA_DIRS").ok();
    existing_paths(desktop_search_paths(UserProfile::current(), xdg.as_deref(), extra))
}

/// Keep paths that exist, preserving order
pub fn existing_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.into_iter().filter(|path| path.exists()).collect()
}
