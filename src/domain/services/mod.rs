//! Domain Services - Pure business logic
//!
//! Services contain domain logic that doesn't belong to a single entity.

pub mod edit_distance;
pub mod favorites_scorer;
pub mod fuzzy_matcher;
pub mod indexer;
pub mod search_engine;

pub use edit_distance::levenshtein_distance;
pub use favorites_scorer::{FavoritesScorer, DECAY_LAMBDA, FAVORITE_THRESHOLD};
pub use fuzzy_matcher::{FuzzyMatcher, MatchResult};
pub use indexer::{Index, Indexer};
pub use search_engine::{filter_by_type, MatchClass, ScoredEntry, SearchEngine, MINIMUM_SCORE};
