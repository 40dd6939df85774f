//! FavoritesScorer - exponentially decayed usage score

use chrono::{DateTime, Utc};

use crate::domain::entities::AppStats;

/// Decay rate per day
pub const DECAY_LAMBDA: f64 = 0.1;

/// Score at or above which an entry counts as a favorite
pub const FAVORITE_THRESHOLD: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Turns event histories into favorite scores
#[derive(Clone, Copy, Debug)]
pub struct FavoritesScorer {
    lambda: f64,
    threshold: f64,
}

impl FavoritesScorer {
    pub fn new() -> Self {
        Self {
            lambda: DECAY_LAMBDA,
            threshold: FAVORITE_THRESHOLD,
        }
    }

    /// Score relative to the current time
    pub fn score(&self, stats: &AppStats) -> f64 {
        self.score_at(stats, Utc::now())
    }

    /// Sum of `weight * exp(-lambda * age_days)` over all events
    pub fn score_at(&self, stats: &AppStats, now: DateTime<Utc>) -> f64 {
        stats
            .events
            .iter()
            .map(|event| {
                let age_days = (now - event.timestamp).num_seconds() as f64 / SECONDS_PER_DAY;
                event.kind.weight() * (-self.lambda * age_days).exp()
            })
            .sum()
    }

    pub fn is_favorite(&self, score: f64) -> bool {
        score >= self.threshold
    }
}

impl Default for FavoritesScorer {
    fn default() -> Self {
        Self::new()
    }
}
