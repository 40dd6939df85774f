//! FavoritesManager - usage tracking behind the favorites toggle
//!
//! When disabled every operation is a no-op, scores are zero and sorting
//! falls back to alphabetical order.

use std::cmp::Ordering;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::entities::{Entry, EventType, SharedEntry};
use crate::domain::errors::DomainError;
use crate::domain::repositories::{NullUsageRepository, UsageRepository};
use crate::domain::services::FavoritesScorer;

/// Wraps a usage repository and the favorites scorer
pub struct FavoritesManager {
    repository: Arc<dyn UsageRepository>,
    scorer: FavoritesScorer,
    enabled: bool,
}

impl FavoritesManager {
    /// Enabled manager over a repository
    pub fn new(repository: Arc<dyn UsageRepository>) -> Self {
        Self {
            repository,
            scorer: FavoritesScorer::new(),
            enabled: true,
        }
    }

    /// Disabled manager; nothing is recorded or persisted
    pub fn disabled() -> Self {
        Self {
            repository: Arc::new(NullUsageRepository),
            scorer: FavoritesScorer::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn repository(&self) -> &Arc<dyn UsageRepository> {
        &self.repository
    }

    pub fn record_launch(&self, entry: &Entry) {
        self.record(entry, EventType::Launch);
    }

    pub fn record_search(&self, entry: &Entry) {
        self.record(entry, EventType::Search);
    }

    fn record(&self, entry: &Entry, kind: EventType) {
        if self.enabled {
            self.repository.record_event(&entry.path, kind);
        }
    }

    /// Current score of an entry (zero when disabled or unseen)
    pub fn score(&self, entry: &Entry) -> f64 {
        self.score_at(entry, Utc::now())
    }

    pub fn score_at(&self, entry: &Entry, now: DateTime<Utc>) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        self.repository
            .stats(&entry.path)
            .map_or(0.0, |stats| self.scorer.score_at(&stats, now))
    }

    pub fn is_favorite(&self, entry: &Entry) -> bool {
        self.enabled && self.scorer.is_favorite(self.score(entry))
    }

    /// Favorites first by descending score, then the rest by name
    pub fn sort_by_favorites(&self, entries: &mut [SharedEntry]) {
        self.sort_by_favorites_at(entries, Utc::now());
    }

    pub fn sort_by_favorites_at(&self, entries: &mut [SharedEntry], now: DateTime<Utc>) {
        if !self.enabled {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            return;
        }

        // Score each entry once; the comparator must not see scores drift
        let mut ranked: Vec<(f64, SharedEntry)> = entries
            .iter()
            .map(|entry| (self.score_at(entry, now), Arc::clone(entry)))
            .collect();

        ranked.sort_by(|(score_a, a), (score_b, b)| {
            let favorite_a = self.scorer.is_favorite(*score_a);
            let favorite_b = self.scorer.is_favorite(*score_b);
            match (favorite_a, favorite_b) {
                (true, true) => score_b.total_cmp(score_a).then_with(|| a.name.cmp(&b.name)),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => a.name.cmp(&b.name),
            }
        });

        for (slot, (_, entry)) in entries.iter_mut().zip(ranked) {
            *slot = entry;
        }
    }

    /// Persist pending changes
    pub fn save(&self) -> Result<(), DomainError> {
        if !self.enabled {
            return Ok(());
        }
        self.repository.save()
    }

    pub fn cleanup_old_events(&self) {
        if self.enabled {
            self.repository.cleanup_old_events();
        }
    }

    /// Run cleanup on a background thread
    pub fn spawn_cleanup(&self) -> Option<JoinHandle<()>> {
        if !self.enabled {
            return None;
        }
        let repository = Arc::clone(&self.repository);
        Some(thread::spawn(move || {
            repository.cleanup_old_events();
            debug!("Favorites cleanup finished");
        }))
    }
}

impl std::fmt::Debug for FavoritesManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesManager")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
