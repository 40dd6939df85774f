//! Indexer - precomputed per-entry search representation
//!
//! Indices are keyed by the entry's identity key. An index is replaced
//! wholesale when its entry changes; it is never edited in place.

use std::collections::HashMap;

use crate::domain::entities::SharedEntry;
use crate::domain::value_objects::tokenize;

/// Number of description words folded into the searchable text
pub const COMMENT_WORD_LIMIT: usize = 10;

/// Searchable form of one entry
#[derive(Clone, Debug)]
pub struct Index {
    /// The indexed entry
    pub entry: SharedEntry,
    /// Name, generic name and the first words of the comment
    pub searchable_text: String,
    /// Lowercase name
    pub name_normalized: String,
    /// Lowercase generic name (empty when absent)
    pub generic_name_normalized: String,
    /// Lowercase comment
    pub comment_normalized: String,
    /// Tokens of the comment
    pub comment_tokens: Vec<String>,
    /// Lowercase categories
    pub category_tokens: Vec<String>,
}

impl Index {
    /// Build the index for an entry
    pub fn build(entry: SharedEntry) -> Self {
        let mut parts: Vec<&str> = vec![entry.name.as_str()];
        if !entry.generic_name.is_empty() {
            parts.push(&entry.generic_name);
        }
        let comment_head = entry
            .comment
            .split_whitespace()
            .take(COMMENT_WORD_LIMIT)
            .collect::<Vec<_>>()
            .join(" ");
        if !comment_head.is_empty() {
            parts.push(&comment_head);
        }
        let searchable_text = parts.join(" ");

        Self {
            searchable_text,
            name_normalized: entry.name.to_lowercase(),
            generic_name_normalized: entry.generic_name.to_lowercase(),
            comment_normalized: entry.comment.to_lowercase(),
            comment_tokens: tokenize(&entry.comment),
            category_tokens: entry.categories.iter().map(|c| c.to_lowercase()).collect(),
            entry,
        }
    }
}

/// Manages search indices for entries
#[derive(Clone, Debug, Default)]
pub struct Indexer {
    indices: HashMap<String, Index>,
}

impl Indexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every entry (later duplicates of a key replace earlier ones)
    pub fn build(&mut self, entries: &[SharedEntry]) {
        for entry in entries {
            self.add(entry.clone());
        }
    }

    /// Index a single entry, replacing any index under the same key
    pub fn add(&mut self, entry: SharedEntry) {
        self.indices.insert(entry.path.clone(), Index::build(entry));
    }

    /// Look up the index of an identity key
    pub fn get(&self, path: &str) -> Option<&Index> {
        self.indices.get(path)
    }

    /// All indices, ordered by identity key
    pub fn all(&self) -> Vec<&Index> {
        let mut all: Vec<&Index> = self.indices.values().collect();
        all.sort_by(|a, b| a.entry.path.cmp(&b.entry.path));
        all
    }

    pub fn remove(&mut self, path: &str) -> Option<Index> {
        self.indices.remove(path)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn count(&self) -> usize {
        self.indices.len()
    }
}
