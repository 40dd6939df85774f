//! DesktopEntryGateway - freedesktop `.desktop` file scanner
//!
//! Walks search roots and parses the `[Desktop Entry]` group of every
//! `.desktop` file found. Files that are not applications, are hidden, or
//! fail validation produce no entry.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::application::ports::DesktopSourcePort;
use crate::domain::entities::Entry;
use crate::domain::errors::DomainError;

const DESKTOP_ENTRY_GROUP: &str = "[Desktop Entry]";
const DESKTOP_EXTENSION: &str = "desktop";

/// Scans desktop entry directories
#[derive(Clone, Debug, Default)]
pub struct DesktopEntryGateway {
    roots: Vec<PathBuf>,
}

impl DesktopEntryGateway {
    /// Create a gateway over roots in priority order
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Search roots in priority order
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Parse every `.desktop` file below `root`, in file-name order
    ///
    /// Unreadable or malformed files are skipped. Only a root that cannot be
    /// walked at all is an error.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<Entry>, DomainError> {
        if !root.is_dir() {
            return Err(DomainError::source_failure(
                root.display().to_string(),
                "not a directory",
            ));
        }

        let mut entries = Vec::new();
        for item in WalkDir::new(root).sort_by_file_name().into_iter().flatten() {
            if item.file_type().is_dir() || !is_desktop_file(item.path()) {
                continue;
            }

            match parse_file(item.path()) {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {}
                Err(err) => {
                    debug!(path = %item.path().display(), error = %err, "Skipping desktop file")
                }
            }
        }

        Ok(entries)
    }
}

impl DesktopSourcePort for DesktopEntryGateway {
    fn locations(&self) -> &[PathBuf] {
        &self.roots
    }

    fn scan_location(&self, location: &Path) -> Result<Vec<Entry>, DomainError> {
        self.scan_directory(location)
    }
}

fn is_desktop_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == DESKTOP_EXTENSION)
}

/// Read and parse a desktop entry file
pub fn parse_file(path: &Path) -> Result<Option<Entry>, DomainError> {
    // Invalid UTF-8 (e.g. a Latin-1 comment) is replaced, not rejected
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_str(&content, &path.to_string_lossy()))
}

/// Parse desktop entry content, using `path` as the identity key
///
/// Returns `None` for anything that should not be listed.
pub fn parse_str(content: &str, path: &str) -> Option<Entry> {
    let mut entry = Entry {
        path: path.to_string(),
        ..Entry::default()
    };
    let mut in_group = false;
    let mut is_application = false;
    let mut no_display = false;
    let mut hidden = false;

    for line in content.lines().map(str::trim) {
        if line == DESKTOP_ENTRY_GROUP {
            in_group = true;
            continue;
        }
        if line.starts_with('[') {
            in_group = false;
            continue;
        }
        if !in_group || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "Type" => is_application = value == "Application",
            "Name" => entry.name = value.to_string(),
            "GenericName" => entry.generic_name = value.to_string(),
            "Comment" => entry.comment = value.to_string(),
            "Exec" => entry.exec = value.to_string(),
            "Icon" => entry.icon = value.to_string(),
            "Terminal" => entry.terminal = value == "true",
            "Categories" => entry.categories = parse_categories(value),
            "NoDisplay" => no_display = value == "true",
            "Hidden" => hidden = value == "true",
            _ => {}
        }
    }

    if !is_application || no_display || hidden {
        return None;
    }
    entry.validate().ok()?;
    Some(entry)
}

fn parse_categories(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FIREFOX: &str = "\
[Desktop Entry]
# Comment line
Type=Application
Name=Firefox
Name[de]=Feuerfuchs
GenericName=Web Browser
Comment=Browse the World Wide Web
Exec=firefox %u
Icon=firefox
Terminal=false
Categories=Network;WebBrowser;

[Desktop Action new-window]
Name=New Window
Exec=firefox --new-window
";

    #[test]
    fn test_parse_application() {
        let entry = parse_str(FIREFOX, "/usr/share/applications/firefox.desktop").unwrap();

        assert_eq!(entry.name, "Firefox");
        assert_eq!(entry.generic_name, "Web Browser");
        assert_eq!(entry.exec, "firefox %u");
        assert_eq!(entry.icon, "firefox");
        assert!(!entry.terminal);
        assert_eq!(entry.categories, vec!["Network", "WebBrowser"]);
        assert_eq!(entry.path, "/usr/share/applications/firefox.desktop");
    }

    #[test]
    fn test_parse_skips_non_applications() {
        let link = "[Desktop Entry]\nType=Link\nName=Docs\nExec=xdg-open x\n";
        let untyped = "[Desktop Entry]\nName=Docs\nExec=docs\n";

        assert!(parse_str(link, "/a.desktop").is_none());
        assert!(parse_str(untyped, "/a.desktop").is_none());
    }

    #[test]
    fn test_parse_skips_hidden_and_no_display() {
        let hidden = "[Desktop Entry]\nType=Application\nName=A\nExec=a\nHidden=true\n";
        let no_display = "[Desktop Entry]\nType=Application\nName=A\nExec=a\nNoDisplay=true\n";

        assert!(parse_str(hidden, "/a.desktop").is_none());
        assert!(parse_str(no_display, "/a.desktop").is_none());
    }

    #[test]
    fn test_parse_drops_invalid() {
        let no_exec = "[Desktop Entry]\nType=Application\nName=A\n";
        let no_name = "[Desktop Entry]\nType=Application\nExec=a\n";

        assert!(parse_str(no_exec, "/a.desktop").is_none());
        assert!(parse_str(no_name, "/a.desktop").is_none());
    }

    #[test]
    fn test_parse_ignores_keys_outside_group() {
        let content = "Name=Outside\n[Desktop Entry]\nType=Application\nName=Inside\nExec=a\n";
        assert_eq!(parse_str(content, "/a.desktop").unwrap().name, "Inside");
    }

    #[test]
    fn test_parse_terminal_and_value_with_equals() {
        let content =
            "[Desktop Entry]\nType=Application\nName=Top\nExec=env TERM=xterm top\nTerminal=true\n";
        let entry = parse_str(content, "/top.desktop").unwrap();

        assert!(entry.terminal);
        assert_eq!(entry.exec, "env TERM=xterm top");
    }

    #[test]
    fn test_scan_directory_recursive_and_ordered() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("kde");
        fs::create_dir_all(&nested).unwrap();

        let app = |name: &str| {
            format!("[Desktop Entry]\nType=Application\nName={name}\nExec={name}\n")
        };
        fs::write(dir.path().join("zeta.desktop"), app("Zeta")).unwrap();
        fs::write(dir.path().join("alpha.desktop"), app("Alpha")).unwrap();
        fs::write(nested.join("konsole.desktop"), app("Konsole")).unwrap();
        fs::write(dir.path().join("notes.txt"), app("Ignored")).unwrap();
        fs::write(dir.path().join("broken.desktop"), "garbage").unwrap();

        let gateway = DesktopEntryGateway::new(vec![dir.path().to_path_buf()]);
        let entries = gateway.scan_directory(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["Alpha", "Konsole", "Zeta"]);
        assert_eq!(gateway.roots().len(), 1);
    }

    #[test]
    fn test_scan_directory_missing_root() {
        let dir = TempDir::new().unwrap();
        let gateway = DesktopEntryGateway::default();

        let result = gateway.scan_directory(&dir.path().join("missing"));
        assert!(matches!(result, Err(DomainError::Source { .. })));
    }

    #[test]
    fn test_parse_file_with_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cafe.desktop");
        fs::write(
            &path,
            b"[Desktop Entry]\nType=Application\nName=Caf\xE9\nComment=Caf\xE9 au lait\nExec=cafe\n",
        )
        .unwrap();

        let entry = parse_file(&path).unwrap().unwrap();

        assert_eq!(entry.name, "Caf\u{FFFD}");
        assert_eq!(entry.exec, "cafe");
    }

    #[test]
    fn test_parse_file_unreadable() {
        let dir = TempDir::new().unwrap();
        assert!(parse_file(&dir.path().join("absent.desktop")).is_err());
    }
}
