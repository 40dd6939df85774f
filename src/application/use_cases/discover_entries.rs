//! DiscoverEntriesUseCase - merge every entry source into one list
//!
//! Desktop entries are deduplicated by file name across roots, so a file in a
//! higher-priority root shadows same-named files below it. Launcher entries
//! are deduplicated by their synthetic key. A failing root or launcher is
//! logged and skipped.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ports::DesktopSourcePort;
use crate::application::services::LauncherRegistry;
use crate::domain::entities::Entry;

/// Use case for discovering entries from all sources
pub struct DiscoverEntriesUseCase {
    desktop: Box<dyn DesktopSourcePort>,
    launchers: Arc<LauncherRegistry>,
    scan_launchers: bool,
}

impl DiscoverEntriesUseCase {
    pub fn new(desktop: Box<dyn DesktopSourcePort>, launchers: Arc<LauncherRegistry>) -> Self {
        Self {
            desktop,
            launchers,
            scan_launchers: true,
        }
    }

    /// Builder pattern: enable or disable launcher scanners
    pub fn with_launchers_enabled(mut self, enabled: bool) -> Self {
        self.scan_launchers = enabled;
        self
    }

    /// Run discovery across desktop roots, then launchers in name order
    pub fn execute(&self) -> Vec<Entry> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for root in self.desktop.locations() {
            match self.desktop.scan_location(root) {
                Ok(found) => {
                    let before = entries.len();
                    entries.extend(
                        found
                            .into_iter()
                            .filter(|entry| seen.insert(file_name_key(entry))),
                    );
                    info!(
                        source = %root.display(),
                        count = entries.len() - before,
                        "Scanned desktop entries"
                    );
                }
                Err(err) => {
                    warn!(source = %root.display(), error = %err, "Skipping search location")
                }
            }
        }

        if self.scan_launchers {
            for launcher in self.launchers.all() {
                match launcher.scan() {
                    Ok(found) => {
                        let before = entries.len();
                        entries.extend(
                            found
                                .into_iter()
                                .filter(|entry| entry.validate().is_ok())
                                .filter(|entry| seen.insert(entry.path.clone())),
                        );
                        info!(
                            source = launcher.name(),
                            count = entries.len() - before,
                            "Scanned launcher"
                        );
                    }
                    Err(err) => warn!(source = launcher.name(), error = %err, "Skipping launcher"),
                }
            }
        }

        info!(count = entries.len(), "Discovery finished");
        entries
    }
}

/// Dedup key of a desktop entry: the file name of its path
fn file_name_key(entry: &Entry) -> String {
    Path::new(&entry.path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.path.clone())
}
