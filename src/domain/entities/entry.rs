//! Entry entity - a launchable item
//!
//! Entries come from desktop entry files or from launcher catalogs. The
//! `path` field is the identity key across all sources: a filesystem path for
//! desktop entries, a synthetic key (e.g. `heroic-sideload-<id>`) otherwise.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::EntryError;
use crate::domain::value_objects::{AppType, ExecCommand, UserProfile};

/// Entry shared read-only between the catalog, the index and favorites
pub type SharedEntry = Arc<Entry>;

/// A launchable application, game or action
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entry {
    /// Display name
    pub name: String,
    /// Generic name, e.g. "Web Browser"
    pub generic_name: String,
    /// Description shown under the name
    pub comment: String,
    /// Command template (may contain field codes)
    pub exec: String,
    /// Icon name or path
    pub icon: String,
    /// Whether the command must run inside a terminal emulator
    pub terminal: bool,
    /// Categories in declaration order
    pub categories: Vec<String>,
    /// Unique identity key
    pub path: String,
    /// Last time the entry was launched, if known
    pub last_used: Option<DateTime<Utc>>,
}

impl Entry {
    /// Create an entry with the required fields
    pub fn new(name: impl Into<String>, exec: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exec: exec.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Builder pattern: set generic name
    pub fn with_generic_name(mut self, generic_name: impl Into<String>) -> Self {
        self.generic_name = generic_name.into();
        self
    }

    /// Builder pattern: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Builder pattern: set icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Builder pattern: set terminal flag
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Builder pattern: set categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Check the invariant every stored entry satisfies
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.name.is_empty() {
            return Err(EntryError::MissingName);
        }
        if self.exec.is_empty() {
            return Err(EntryError::MissingExec);
        }
        Ok(())
    }

    /// Classify against the current user's profile
    pub fn app_type(&self) -> AppType {
        AppType::classify(self, UserProfile::current())
    }

    /// Parse the exec template into an environment and argument vector
    pub fn command(&self) -> Result<ExecCommand, EntryError> {
        self.validate()?;
        ExecCommand::parse(&self.exec)
    }

    /// Whether any category is a game category
    pub fn is_game(&self) -> bool {
        self.categories.iter().any(|category| {
            category.eq_ignore_ascii_case("game") || category.eq_ignore_ascii_case("games")
        })
    }
}
