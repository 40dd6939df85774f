//! Infrastructure Layer
//!
//! This layer contains concrete implementations and machine-specific
//! knowledge.
//! It contains:
//! - **FileSystem**: Standard search locations and per-user directories
//! - **CompositionRoot**: Dependency injection container
//!
//! # Clean Architecture Rules
//! - Wires adapters into application services
//! - No domain logic here - only technical implementations

pub mod composition_root;
pub mod filesystem;

pub use composition_root::{CompositionConfig, CompositionRoot};
pub use filesystem::AppDirs;
