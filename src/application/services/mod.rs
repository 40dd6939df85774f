//! Application Services - Coordination and management services
//!
//! These services coordinate use cases and own application state.

pub mod app_catalog;
pub mod favorites_manager;
pub mod launcher_registry;

pub use app_catalog::AppCatalog;
pub use favorites_manager::FavoritesManager;
pub use launcher_registry::LauncherRegistry;
