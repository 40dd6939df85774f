//! Domain Layer - Core business logic
//!
//! Entities, value objects, repository interfaces and domain services.
//! Nothing here touches the filesystem directly.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, EntryError};
