//! DesktopSourcePort - interface for desktop entry search locations

use std::path::{Path, PathBuf};

use crate::domain::entities::Entry;
use crate::domain::errors::DomainError;

/// Port interface for scanning desktop entry directories
pub trait DesktopSourcePort: Send + Sync {
    /// Search locations, highest priority first
    fn locations(&self) -> &[PathBuf];

    /// Valid entries found below one location, in a stable order
    fn scan_location(&self, location: &Path) -> Result<Vec<Entry>, DomainError>;
}
