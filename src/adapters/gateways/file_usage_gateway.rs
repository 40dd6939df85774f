//! FileUsageGateway - JSON file backed usage repository

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::{AppStats, EventType};
use crate::domain::errors::DomainError;
use crate::domain::repositories::usage_repository::{UsageRepository, RETENTION_DAYS};

#[derive(Debug, Default)]
struct UsageState {
    stats: HashMap<String, Arc<AppStats>>,
    dirty: bool,
}

/// File-based usage repository
///
/// The file holds a JSON array of per-identity histories. Writers take the
/// lock exclusively; score reads share it.
pub struct FileUsageGateway {
    path: PathBuf,
    state: RwLock<UsageState>,
}

impl FileUsageGateway {
    /// Open the store at `path`, creating its directory and loading any
    /// existing history
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                DomainError::Setup(format!("cannot create {}: {}", parent.display(), err))
            })?;
        }

        let gateway = Self {
            path,
            state: RwLock::new(UsageState::default()),
        };
        gateway.load()?;
        Ok(gateway)
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Number of identities with history
    pub fn len(&self) -> usize {
        self.state.read().stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().stats.is_empty()
    }

    /// Serialize histories ordered by key
    fn serialize(stats: &HashMap<String, Arc<AppStats>>) -> Result<String, DomainError> {
        let mut list: Vec<&AppStats> = stats.values().map(Arc::as_ref).collect();
        list.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(serde_json::to_string_pretty(&list)?)
    }
}

impl UsageRepository for FileUsageGateway {
    fn record_event_at(&self, key: &str, kind: EventType, timestamp: DateTime<Utc>) {
        let mut state = self.state.write();
        let stats = state
            .stats
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AppStats::new(key)));
        Arc::make_mut(stats).push(kind, timestamp);
        state.dirty = true;
    }

    fn stats(&self, key: &str) -> Option<Arc<AppStats>> {
        self.state.read().stats.get(key).cloned()
    }

    fn cleanup_old_events_at(&self, now: DateTime<Utc>) {
        let cutoff = now - Duration::days(RETENTION_DAYS);
        let mut state = self.state.write();

        let mut changed = false;
        state.stats.retain(|_, stats| {
            // Only clone histories that actually lose events
            if stats.events.iter().any(|event| event.timestamp <= cutoff) {
                Arc::make_mut(stats).retain_newer_than(cutoff);
                changed = true;
            }
            !stats.is_empty()
        });

        if changed {
            debug!(path = %self.path.display(), "Swept expired usage events");
            state.dirty = true;
        }
    }

    fn save(&self) -> Result<(), DomainError> {
        let mut state = self.state.write();
        if !state.dirty {
            return Ok(());
        }

        // Replace the store by rename; a partial write only ever hits the temp file
        let content = Self::serialize(&state.stats)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        state.dirty = false;
        debug!(path = %self.path.display(), count = state.stats.len(), "Saved usage history");
        Ok(())
    }

    fn load(&self) -> Result<(), DomainError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        let list: Vec<AppStats> = serde_json::from_str(&content)?;

        let mut state = self.state.write();
        for stats in list {
            state.stats.insert(stats.key.clone(), Arc::new(stats));
        }
        Ok(())
    }

    fn is_dirty(&self) -> bool {
        self.state.read().dirty
    }
}
