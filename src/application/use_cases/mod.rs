//! Use Cases - Single-purpose application operations

pub mod discover_entries;

pub use discover_entries::DiscoverEntriesUseCase;
