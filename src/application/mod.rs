//! Application Layer - Use Cases and Business Workflows
//!
//! This layer orchestrates domain entities and defines application-specific workflows.
//! It contains:
//! - **Use Cases**: Single-purpose operations (DiscoverEntries)
//! - **Ports**: Interfaces for external dependencies (desktop entry sources)
//! - **Services**: The catalog, favorites and launcher registry
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that adapters implement

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;
