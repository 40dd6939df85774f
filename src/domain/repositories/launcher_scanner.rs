//! LauncherScanner - interface for foreign launcher catalogs

use crate::domain::entities::Entry;
use crate::domain::errors::DomainError;

/// A pluggable source of entries outside the desktop-entry directories
pub trait LauncherScanner: Send + Sync {
    /// Registry key, unique per scanner
    fn name(&self) -> &str;

    /// Produce this launcher's entries
    ///
    /// Each entry's `path` must be a synthetic key unique within the
    /// launcher. An error skips this launcher for the current scan only.
    fn scan(&self) -> Result<Vec<Entry>, DomainError>;
}
