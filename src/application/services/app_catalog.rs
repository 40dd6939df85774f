//! AppCatalog - the launcher core surface
//!
//! Owns the discovered entry set and its search index, and composes search
//! results with favorites ordering. Presentation code talks to this type.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{debug, info, warn};

use crate::application::services::FavoritesManager;
use crate::application::use_cases::DiscoverEntriesUseCase;
use crate::domain::entities::{Entry, SharedEntry};
use crate::domain::errors::DomainError;
use crate::domain::services::{filter_by_type, SearchEngine};
use crate::domain::value_objects::AppType;

/// Scanned entries plus the search and favorites services over them
pub struct AppCatalog {
    discovery: DiscoverEntriesUseCase,
    favorites: Arc<FavoritesManager>,
    entries: Vec<SharedEntry>,
    engine: Option<SearchEngine>,
    edit_distance_tiebreak: bool,
    maintenance: Option<JoinHandle<()>>,
}

impl AppCatalog {
    pub fn new(discovery: DiscoverEntriesUseCase, favorites: Arc<FavoritesManager>) -> Self {
        Self {
            discovery,
            favorites,
            entries: Vec::new(),
            engine: None,
            edit_distance_tiebreak: false,
            maintenance: None,
        }
    }

    /// Builder pattern: break equal search ranks by edit distance
    pub fn with_edit_distance_tiebreak(mut self, enabled: bool) -> Self {
        self.edit_distance_tiebreak = enabled;
        self
    }

    /// Discover, order and index all entries
    ///
    /// Replaces any previous scan. Favorites cleanup is started in the
    /// background afterwards.
    pub fn scan(&mut self) -> Result<(), DomainError> {
        self.finish_maintenance();

        let mut entries: Vec<SharedEntry> =
            self.discovery.execute().into_iter().map(Arc::new).collect();
        self.favorites.sort_by_favorites(&mut entries);

        self.engine = Some(
            SearchEngine::new(&entries).with_edit_distance_tiebreak(self.edit_distance_tiebreak),
        );
        self.entries = entries;
        info!(count = self.entries.len(), "Catalog ready");

        self.maintenance = self.favorites.spawn_cleanup();
        Ok(())
    }

    /// Wait for background favorites maintenance, if any is running
    pub fn finish_maintenance(&mut self) {
        if let Some(handle) = self.maintenance.take() {
            if handle.join().is_err() {
                warn!("Favorites cleanup thread panicked");
            }
        }
    }

    pub fn entries(&self) -> &[SharedEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries_by_type(&self, app_type: AppType) -> Vec<SharedEntry> {
        filter_by_type(&self.entries, app_type)
    }

    /// Entry counts per concrete type, plus [`AppType::All`]
    pub fn app_type_counts(&self) -> BTreeMap<AppType, usize> {
        let mut counts: BTreeMap<AppType, usize> =
            AppType::CONCRETE.iter().map(|kind| (*kind, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.app_type()).or_default() += 1;
        }
        counts.insert(AppType::All, self.entries.len());
        counts
    }

    /// Ranked entries for a query and type filter
    ///
    /// Before the first scan this is a plain type filter. A non-empty query
    /// records a search event for its top result.
    pub fn filter(&self, query: &str, app_type: AppType) -> Vec<SharedEntry> {
        let Some(engine) = &self.engine else {
            return self.entries_by_type(app_type);
        };

        let mut results = engine.search(query, app_type, &self.entries);
        self.favorites.sort_by_favorites(&mut results);

        if !query.is_empty() {
            if let Some(first) = results.first() {
                self.favorites.record_search(first);
            }
        }
        results
    }

    pub fn record_launch(&self, entry: &Entry) {
        self.favorites.record_launch(entry);
    }

    pub fn record_search(&self, entry: &Entry) {
        self.favorites.record_search(entry);
    }

    /// Add an entry, or replace the one with the same identity key
    pub fn upsert_entry(&mut self, entry: Entry) -> Result<(), DomainError> {
        entry.validate()?;
        let entry = Arc::new(entry);

        match self.entries.iter_mut().find(|existing| existing.path == entry.path) {
            Some(slot) => *slot = Arc::clone(&entry),
            None => self.entries.push(Arc::clone(&entry)),
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.update_index(Arc::clone(&entry));
        }
        debug!(path = %entry.path, "Upserted entry");
        Ok(())
    }

    /// Remove the entry with an identity key
    pub fn remove_entry(&mut self, path: &str) -> Result<SharedEntry, DomainError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.path == path)
            .ok_or_else(|| DomainError::NotFound(path.to_string()))?;

        let removed = self.entries.remove(position);
        if let Some(engine) = self.engine.as_mut() {
            engine.remove_index(path);
        }
        Ok(removed)
    }

    /// Checkpoint favorites to storage
    pub fn save_favorites(&self) -> Result<(), DomainError> {
        self.favorites.save()
    }

    pub fn favorites(&self) -> &FavoritesManager {
        &self.favorites
    }

    pub fn is_indexed(&self) -> bool {
        self.engine.is_some()
    }
}

impl Drop for AppCatalog {
    fn drop(&mut self) {
        self.finish_maintenance();
    }
}
