//! LauncherRegistry - name-keyed set of launcher scanners
//!
//! Populated once by the composition root; read by every scan afterwards.
//! Iteration is always in name order.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::repositories::LauncherScanner;

/// Registry of launcher scanners
#[derive(Default)]
pub struct LauncherRegistry {
    scanners: RwLock<BTreeMap<String, Arc<dyn LauncherScanner>>>,
}

impl LauncherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scanner under its own name, replacing any previous one
    pub fn register(&self, scanner: Arc<dyn LauncherScanner>) {
        let name = scanner.name().to_string();
        self.scanners.write().insert(name, scanner);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn LauncherScanner>> {
        self.scanners.read().get(name).cloned()
    }

    /// Registered names, sorted
    pub fn list(&self) -> Vec<String> {
        self.scanners.read().keys().cloned().collect()
    }

    /// Registered scanners, sorted by name
    pub fn all(&self) -> Vec<Arc<dyn LauncherScanner>> {
        self.scanners.read().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.scanners.read().len()
    }

    pub fn unregister(&self, name: &str) -> Option<Arc<dyn LauncherScanner>> {
        self.scanners.write().remove(name)
    }

    pub fn clear(&self) {
        self.scanners.write().clear();
    }
}

impl std::fmt::Debug for LauncherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LauncherRegistry")
            .field("scanners", &self.list())
            .finish()
    }
}
