//! Interface Adapters Layer
//!
//! This layer converts between external formats and domain types.
//! It contains:
//! - **Gateways**: Scanner and repository implementations backed by files
//!
//! # Clean Architecture Rules
//! - Depends on the domain and application layers
//! - Implements repository traits from the domain layer and ports from the application layer
//! - Knows file formats; nothing above it does

pub mod gateways;

pub use gateways::*;
