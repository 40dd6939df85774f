//! Domain Entities - Core business objects

pub mod entry;
pub mod usage;

pub use entry::{Entry, SharedEntry};
pub use usage::{AppStats, Event, EventType, MAX_EVENTS};
