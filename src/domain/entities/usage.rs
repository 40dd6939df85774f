//! Usage history entities
//!
//! An identity's usage is a bounded list of timestamped events. Scores are
//! derived from this history on demand and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of events kept per identity
pub const MAX_EVENTS: usize = 1000;

/// Kind of user interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Launch,
    Search,
}

impl EventType {
    /// Fixed contribution of one fresh event of this type
    pub fn weight(self) -> f64 {
        match self {
            EventType::Launch => 1.0,
            EventType::Search => 0.3,
        }
    }
}

/// A single interaction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EventType,
}

/// Usage history for one identity key
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppStats {
    /// Identity key of the entry (its `path`)
    #[serde(rename = "desktop_file")]
    pub key: String,
    /// Events, oldest first
    pub events: Vec<Event>,
}

impl AppStats {
    /// Empty history for an identity
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            events: Vec::new(),
        }
    }

    /// Append an event, dropping the oldest ones beyond [`MAX_EVENTS`]
    pub fn push(&mut self, kind: EventType, timestamp: DateTime<Utc>) {
        self.events.push(Event { timestamp, kind });
        if self.events.len() > MAX_EVENTS {
            let excess = self.events.len() - MAX_EVENTS;
            self.events.drain(..excess);
        }
    }

    /// Keep only events strictly newer than `cutoff`; returns whether anything was removed
    pub fn retain_newer_than(&mut self, cutoff: DateTime<Utc>) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.timestamp > cutoff);
        self.events.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
