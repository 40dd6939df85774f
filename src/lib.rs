//! Kestrel - application launcher core with Clean Architecture
//!
//! This crate is organized following Clean Architecture principles:
//!
//! - **Domain Layer**: Entries, matching, ranking and favorites scoring
//! - **Application Layer**: Discovery, the catalog and favorites management
//! - **Adapters Layer**: Desktop entry, Heroic and favorites file gateways
//! - **Infrastructure Layer**: Search locations and wiring
//! - **Shared**: Cross-cutting concerns (config, logging)
//!
//! Rendering, input handling and process launching live outside this crate.

// ============================================================================
// CLEAN ARCHITECTURE LAYERS
// ============================================================================

/// Domain Layer - Pure business logic
///
/// Contains:
/// - Entities: Entry, usage events and histories
/// - Value Objects: AppType, SearchQuery, ExecCommand
/// - Repository Traits: LauncherScanner, UsageRepository
/// - Domain Services: FuzzyMatcher, Indexer, SearchEngine, FavoritesScorer
pub mod domain;

/// Application Layer - Use cases and business workflows
pub mod application;

/// Adapters Layer - File-backed gateways
pub mod adapters;

/// Infrastructure Layer - Locations and composition
pub mod infrastructure;

/// Shared - Configuration and logging
pub mod shared;

pub use application::services::AppCatalog;
pub use domain::entities::{Entry, SharedEntry};
pub use domain::value_objects::AppType;
pub use infrastructure::CompositionRoot;
pub use shared::Config;
