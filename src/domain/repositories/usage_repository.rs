//! UsageRepository - interface for per-entry usage history
//!
//! This trait defines how usage events are recorded, swept and persisted.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{AppStats, EventType};
use crate::domain::errors::DomainError;

/// Events older than this many days are swept by cleanup
pub const RETENTION_DAYS: i64 = 90;

/// Repository interface for usage history
///
/// Implementations take `&self` everywhere and guard their state internally,
/// so one store can be shared between the query path and a cleanup thread.
pub trait UsageRepository: Send + Sync {
    /// Record an event stamped with the current time
    fn record_event(&self, key: &str, kind: EventType) {
        self.record_event_at(key, kind, Utc::now());
    }

    /// Record an event with an explicit timestamp
    fn record_event_at(&self, key: &str, kind: EventType, timestamp: DateTime<Utc>);

    /// Snapshot of an identity's history
    fn stats(&self, key: &str) -> Option<Arc<AppStats>>;

    /// Sweep events older than the retention window
    fn cleanup_old_events(&self) {
        self.cleanup_old_events_at(Utc::now());
    }

    /// Sweep relative to `now`, dropping identities left without events
    fn cleanup_old_events_at(&self, now: DateTime<Utc>);

    /// Write state if it changed since the last save
    fn save(&self) -> Result<(), DomainError>;

    /// Merge persisted state into memory
    fn load(&self) -> Result<(), DomainError>;

    /// Whether unsaved changes exist
    fn is_dirty(&self) -> bool;
}

/// A null implementation for testing and for disabled favorites
pub struct NullUsageRepository;

impl UsageRepository for NullUsageRepository {
    fn record_event_at(&self, _key: &str, _kind: EventType, _timestamp: DateTime<Utc>) {}

    fn stats(&self, _key: &str) -> Option<Arc<AppStats>> {
        None
    }

    fn cleanup_old_events_at(&self, _now: DateTime<Utc>) {}

    fn save(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn load(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn is_dirty(&self) -> bool {
        false
    }
}
