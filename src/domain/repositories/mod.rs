//! Domain Repository Interfaces
//!
//! These are trait definitions only - no implementations.
//! Implementations belong in the adapters/gateways layer.

pub mod launcher_scanner;
pub mod usage_repository;

pub use launcher_scanner::LauncherScanner;
pub use usage_repository::{NullUsageRepository, UsageRepository, RETENTION_DAYS};
