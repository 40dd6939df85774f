//! AppType value object - provenance classification of an entry
//!
//! Classification is derived from an entry's path, exec and categories and is
//! never persisted.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::domain::entities::Entry;

/// Where an entry comes from, or what it is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AppType {
    /// Filter value matching every type
    All,
    System,
    NixSystem,
    NixHome,
    Flatpak,
    Game,
    Other,
}

impl AppType {
    /// Every concrete classification (excludes [`AppType::All`])
    pub const CONCRETE: [AppType; 6] = [
        AppType::System,
        AppType::NixSystem,
        AppType::NixHome,
        AppType::Flatpak,
        AppType::Game,
        AppType::Other,
    ];

    /// Label shown in type filters
    pub fn label(self) -> &'static str {
        match self {
            AppType::All => "All",
            AppType::System => "System",
            AppType::NixSystem => "Nix-Sys",
            AppType::NixHome => "Nix-Home",
            AppType::Flatpak => "Flatpak",
            AppType::Game => "Games",
            AppType::Other => "Other",
        }
    }

    /// Whether an entry of type `other` passes this filter
    pub fn accepts(self, other: AppType) -> bool {
        self == AppType::All || self == other
    }

    /// Classify an entry for the given user
    pub fn classify(entry: &Entry, profile: &UserProfile) -> AppType {
        if entry.path.contains("flatpak") {
            return AppType::Flatpak;
        }
        if is_nix(entry) {
            return nix_type(entry, profile);
        }
        if entry.is_game() {
            return AppType::Game;
        }
        if entry.path.starts_with("/usr/share/applications")
            || entry.path.starts_with("/usr/local/share/applications")
        {
            return AppType::System;
        }
        AppType::Other
    }
}

fn is_nix(entry: &Entry) -> bool {
    const NIX_MARKERS: [&str; 4] = [
        "/nix/store",
        ".nix-profile",
        "/run/current-system",
        "/etc/profiles/per-user",
    ];
    NIX_MARKERS.iter().any(|marker| entry.path.contains(marker))
        || entry.exec.contains("/nix/store")
}

fn nix_type(entry: &Entry, profile: &UserProfile) -> AppType {
    let home_markers = [
        format!("{}/.nix-profile", profile.home),
        format!("{}/.local/state/nix/profile", profile.home),
        format!("/etc/profiles/per-user/{}", profile.user),
    ];
    if home_markers.iter().any(|marker| entry.path.contains(marker.as_str())) {
        return AppType::NixHome;
    }
    // Anything else from Nix (including /run/current-system and the default
    // profile) is treated as system-level.
    AppType::NixSystem
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AppType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(AppType::All)
            .chain(AppType::CONCRETE)
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown app type: {s}"))
    }
}

/// The user whose profile paths distinguish home-manager from system Nix installs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Home directory without trailing slash
    pub home: String,
    /// Login name
    pub user: String,
}

impl UserProfile {
    pub fn new(home: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            user: user.into(),
        }
    }

    /// Profile of the running process, resolved once
    pub fn current() -> &'static UserProfile {
        static PROFILE: OnceLock<UserProfile> = OnceLock::new();
        PROFILE.get_or_init(|| {
            let home = dirs::home_dir()
                .map(|p| p.to_string_lossy().trim_end_matches('/').to_string())
                .unwrap_or_default();
            let user = std::env::var("USER").unwrap_or_default();
            UserProfile { home, user }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new("/home/alice", "alice")
    }

    fn at(path: &str) -> Entry {
        Entry::new("App", "app", path)
    }

    #[test]
    fn test_classify_flatpak() {
        let entry = at("/var/lib/flatpak/exports/share/applications/org.mozilla.firefox.desktop");
        assert_eq!(AppType::classify(&entry, &profile()), AppType::Flatpak);
    }

    #[test]
    fn test_classify_nix_system() {
        let entry = at("/run/current-system/sw/share/applications/firefox.desktop");
        assert_eq!(AppType::classify(&entry, &profile()), AppType::NixSystem);

        let store_exec = Entry::new("Tool", "/nix/store/abc-tool/bin/tool", "/opt/tool.desktop");
        assert_eq!(AppType::classify(&store_exec, &profile()), AppType::NixSystem);
    }

    #[test]
    fn test_classify_nix_home() {
        let entry = at("/home/alice/.nix-profile/share/applications/alacritty.desktop");
        assert_eq!(AppType::classify(&entry, &profile()), AppType::NixHome);

        let per_user = at("/etc/profiles/per-user/alice/share/applications/foot.desktop");
        assert_eq!(AppType::classify(&per_user, &profile()), AppType::NixHome);

        let other_user = at("/etc/profiles/per-user/bob/share/applications/foot.desktop");
        assert_eq!(AppType::classify(&other_user, &profile()), AppType::NixSystem);
    }

    #[test]
    fn test_classify_game_before_system() {
        let entry = at("/usr/share/applications/supertuxkart.desktop")
            .with_categories(["Game", "ArcadeGame"]);
        assert_eq!(AppType::classify(&entry, &profile()), AppType::Game);
    }

    #[test]
    fn test_classify_system_and_other() {
        assert_eq!(
            AppType::classify(&at("/usr/share/applications/firefox.desktop"), &profile()),
            AppType::System
        );
        assert_eq!(
            AppType::classify(&at("/usr/local/share/applications/x.desktop"), &profile()),
            AppType::System
        );
        let custom = at("/home/alice/.local/share/applications/custom.desktop");
        assert_eq!(AppType::classify(&custom, &profile()), AppType::Other);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let entry = at("/usr/share/applications/firefox.desktop").with_categories(["Network"]);
        let first = AppType::classify(&entry, &profile());
        for _ in 0..10 {
            assert_eq!(AppType::classify(&entry, &profile()), first);
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for kind in std::iter::once(AppType::All).chain(AppType::CONCRETE) {
            assert_eq!(kind.label().parse::<AppType>().unwrap(), kind);
        }
        assert_eq!("games".parse::<AppType>().unwrap(), AppType::Game);
        assert!("Snap".parse::<AppType>().is_err());
    }

    #[test]
    fn test_accepts() {
        assert!(AppType::All.accepts(AppType::Game));
        assert!(AppType::Game.accepts(AppType::Game));
        assert!(!AppType::Game.accepts(AppType::System));
    }
}
