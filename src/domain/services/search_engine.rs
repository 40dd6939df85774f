//! SearchEngine - tiered match classification and ranking
//!
//! Each entry is classified into the first tier it satisfies. Results are
//! ordered by tier, then by score within a tier. Entries scoring below
//! [`MINIMUM_SCORE`] are dropped.

use std::cmp::Ordering;

use crate::domain::entities::SharedEntry;
use crate::domain::services::edit_distance::levenshtein_distance;
use crate::domain::services::fuzzy_matcher::FuzzyMatcher;
use crate::domain::services::indexer::{Index, Indexer};
use crate::domain::value_objects::{AppType, SearchQuery};

/// Entries scoring below this are excluded from results
pub const MINIMUM_SCORE: i32 = 50;

const EXACT_SCORE: i32 = 1000;
const PREFIX_SCORE: i32 = 800;
const NAME_CONTAINS_SCORE: i32 = 400;
const COMMENT_CONTAINS_SCORE: i32 = 200;
const TOKEN_SCORE: i32 = 100;
const GENERIC_NAME_BONUS: i32 = 100;
const CATEGORY_BONUS: i32 = 50;

/// Tier of a match; earlier variants always rank first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchClass {
    Exact,
    Prefix,
    Fuzzy,
    Contains,
    Token,
}

/// An entry with its match tier and score
#[derive(Clone, Debug)]
pub struct ScoredEntry {
    pub entry: SharedEntry,
    pub score: i32,
    pub class: MatchClass,
}

/// Service for ranking entries against a query
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    indexer: Indexer,
    matcher: FuzzyMatcher,
    edit_distance_tiebreak: bool,
}

impl SearchEngine {
    /// Create an engine indexing the given entries
    pub fn new(entries: &[SharedEntry]) -> Self {
        let mut indexer = Indexer::new();
        indexer.build(entries);
        Self {
            indexer,
            matcher: FuzzyMatcher::new(),
            edit_distance_tiebreak: false,
        }
    }

    /// Builder pattern: replace the fuzzy matcher
    pub fn with_matcher(mut self, matcher: FuzzyMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Builder pattern: break equal (class, score) ties by edit distance of name to query
    pub fn with_edit_distance_tiebreak(mut self, enabled: bool) -> Self {
        self.edit_distance_tiebreak = enabled;
        self
    }

    pub fn indexer(&self) -> &Indexer {
        &self.indexer
    }

    /// Search entries, returning them in rank order
    ///
    /// An empty query returns the entries of the requested type in their
    /// original order.
    pub fn search(
        &self,
        query: &str,
        app_type: AppType,
        entries: &[SharedEntry],
    ) -> Vec<SharedEntry> {
        let query = SearchQuery::new(query);
        if query.is_empty() {
            return filter_by_type(entries, app_type);
        }

        self.search_scored(&query, app_type, entries)
            .into_iter()
            .map(|scored| scored.entry)
            .collect()
    }

    /// Search entries, keeping scores and tiers
    pub fn search_scored(
        &self,
        query: &SearchQuery,
        app_type: AppType,
        entries: &[SharedEntry],
    ) -> Vec<ScoredEntry> {
        let mut scored: Vec<ScoredEntry> = entries
            .iter()
            .filter(|entry| app_type.accepts(entry.app_type()))
            .filter_map(|entry| {
                let index = self.indexer.get(&entry.path)?;
                let (score, class) = self.score_entry(query, index)?;
                (score >= MINIMUM_SCORE).then(|| ScoredEntry {
                    entry: entry.clone(),
                    score,
                    class,
                })
            })
            .collect();

        // Stable sort keeps discovery order for full ties
        scored.sort_by(|a, b| self.compare(query, a, b));
        scored
    }

    fn compare(&self, query: &SearchQuery, a: &ScoredEntry, b: &ScoredEntry) -> Ordering {
        let primary = a.class.cmp(&b.class).then_with(|| b.score.cmp(&a.score));
        if !self.edit_distance_tiebreak || primary != Ordering::Equal {
            return primary;
        }
        let distance = |entry: &SharedEntry| {
            levenshtein_distance(&entry.name.to_lowercase(), query.normalized())
        };
        distance(&a.entry).cmp(&distance(&b.entry))
    }

    /// Tier and score of one entry, or `None` when nothing matches
    fn score_entry(&self, query: &SearchQuery, index: &Index) -> Option<(i32, MatchClass)> {
        let needle = query.normalized();

        if index.name_normalized == needle {
            return Some((EXACT_SCORE, MatchClass::Exact));
        }
        if index.name_normalized.starts_with(needle) {
            return Some((PREFIX_SCORE, MatchClass::Prefix));
        }

        let fuzzy = self.matcher.fuzzy_match(&query.text, &index.searchable_text);
        let (mut score, class) = match fuzzy {
            Some(result) => (result.score, MatchClass::Fuzzy),
            None if index.name_normalized.contains(needle) => {
                (NAME_CONTAINS_SCORE, MatchClass::Contains)
            }
            None if index.comment_normalized.contains(needle) => {
                (COMMENT_CONTAINS_SCORE, MatchClass::Contains)
            }
            None if tokens_match(query.tokens(), &index.comment_tokens) => {
                (TOKEN_SCORE, MatchClass::Token)
            }
            None => return None,
        };

        // Bonuses only apply below the exact/prefix short-circuits
        if !index.generic_name_normalized.is_empty()
            && index.generic_name_normalized.contains(needle)
        {
            score += GENERIC_NAME_BONUS;
        }
        if index.category_tokens.iter().any(|category| category.contains(needle)) {
            score += CATEGORY_BONUS;
        }

        Some((score, class))
    }

    /// Index a new or changed entry
    pub fn update_index(&mut self, entry: SharedEntry) {
        self.indexer.add(entry);
    }

    /// Drop the index of an identity key
    pub fn remove_index(&mut self, path: &str) {
        self.indexer.remove(path);
    }
}

/// Whether any query token is a substring of any target token
fn tokens_match(query_tokens: &[String], target_tokens: &[String]) -> bool {
    query_tokens
        .iter()
        .any(|qt| target_tokens.iter().any(|tt| tt.contains(qt.as_str())))
}

/// Entries of the given type, in their original order
pub fn filter_by_type(entries: &[SharedEntry], app_type: AppType) -> Vec<SharedEntry> {
    entries
        .iter()
        .filter(|entry| app_type.accepts(entry.app_type()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Entry;
    use std::sync::Arc;

    fn entry(name: &str, path: &str) -> SharedEntry {
        Arc::new(Entry::new(name, name.to_lowercase(), path))
    }

    fn names(entries: &[SharedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn test_entries() -> Vec<SharedEntry> {
        vec![
            entry("Firefox", "/home/u/.local/share/applications/firefox.desktop"),
            entry("Firefox Developer", "/home/u/.local/share/applications/firefox-dev.desktop"),
            entry("File Manager", "/home/u/.local/share/applications/files.desktop"),
        ]
    }

    #[test]
    fn test_search_exact_then_prefix() {
        let entries = test_entries();
        let engine = SearchEngine::new(&entries);

        let results = engine.search("firefox", AppType::All, &entries);

        assert_eq!(names(&results)[..2], ["Firefox", "Firefox Developer"]);
    }

    #[test]
    fn test_search_empty_query_keeps_order() {
        let entries = test_entries();
        let engine = SearchEngine::new(&entries);

        let results = engine.search("", AppType::All, &entries);

        assert_eq!(names(&results), vec!["Firefox", "Firefox Developer", "File Manager"]);
    }

    #[test]
    fn test_search_empty_query_filters_type() {
        let mut entries = test_entries();
        entries.push(Arc::new(
            Entry::new("SuperTuxKart", "supertuxkart", "/opt/stk.desktop")
                .with_categories(["Game"]),
        ));
        let engine = SearchEngine::new(&entries);

        let games = engine.search("", AppType::Game, &entries);

        assert_eq!(names(&games), vec!["SuperTuxKart"]);
    }

    #[test]
    fn test_classes() {
        let entries = vec![
            Arc::new(Entry::new("Firefox", "firefox", "/a")),
            Arc::new(Entry::new("Firewall", "fw", "/b")),
            Arc::new(Entry::new("Gimp", "gimp", "/c")),
            Arc::new(Entry::new("Mixer", "mixer", "/d").with_comment("Sound and more")),
        ];
        let engine = SearchEngine::new(&entries);

        let exact = engine.search_scored(&SearchQuery::new("FIREFOX"), AppType::All, &entries);
        assert_eq!(exact[0].class, MatchClass::Exact);
        assert_eq!(exact[0].score, 1000);

        let prefix = engine.search_scored(&SearchQuery::new("fire"), AppType::All, &entries);
        assert!(prefix.iter().all(|s| s.class == MatchClass::Prefix && s.score == 800));
        assert_eq!(prefix.len(), 2);

        let fuzzy = engine.search_scored(&SearchQuery::new("gmp"), AppType::All, &entries);
        assert_eq!(fuzzy.len(), 1);
        assert_eq!(fuzzy[0].class, MatchClass::Fuzzy);
    }

    #[test]
    fn test_contains_and_token_fallbacks() {
        // Fuzzy runs against the bounded searchable text, so words past the
        // tenth comment word only surface through the fallbacks.
        let long = "one two three four five six seven eight nine ten hidden treasure";
        let entries = vec![Arc::new(Entry::new("Alpha", "alpha", "/a").with_comment(long))];
        let engine = SearchEngine::new(&entries);

        let contains = engine.search_scored(&SearchQuery::new("treasure"), AppType::All, &entries);
        assert_eq!(contains.len(), 1);
        assert_eq!(contains[0].class, MatchClass::Contains);
        assert_eq!(contains[0].score, 200);

        let token = engine.search_scored(&SearchQuery::new("zzz treas"), AppType::All, &entries);
        assert_eq!(token.len(), 1);
        assert_eq!(token[0].class, MatchClass::Token);
        assert_eq!(token[0].score, 100);
    }

    #[test]
    fn test_bonuses_skip_exact_and_prefix() {
        let entries = vec![
            Arc::new(
                Entry::new("Browser", "browser", "/a")
                    .with_generic_name("Web Browser")
                    .with_categories(["WebBrowser"]),
            ),
            Arc::new(
                Entry::new("Surf", "surf", "/b")
                    .with_generic_name("Web Browser")
                    .with_categories(["WebBrowser"]),
            ),
        ];
        let engine = SearchEngine::new(&entries);

        let results = engine.search_scored(&SearchQuery::new("browser"), AppType::All, &entries);
        assert_eq!(results[0].entry.name, "Browser");
        assert_eq!(results[0].score, 1000);

        let surf = &results[1];
        assert_eq!(surf.class, MatchClass::Fuzzy);
        let base = FuzzyMatcher::new()
            .fuzzy_match("browser", "Surf Web Browser")
            .unwrap()
            .score;
        assert_eq!(surf.score, base + 100 + 50);
    }

    #[test]
    fn test_tier_order_across_mixed_set() {
        let entries = vec![
            Arc::new(Entry::new("Code Editor", "a", "/1").with_comment("code")),
            Arc::new(Entry::new("VS Code", "b", "/2")),
            Arc::new(Entry::new("Code", "c", "/3")),
            Arc::new(Entry::new("Codec Tools", "d", "/4")),
        ];
        let engine = SearchEngine::new(&entries);

        let results = engine.search_scored(&SearchQuery::new("code"), AppType::All, &entries);
        let classes: Vec<MatchClass> = results.iter().map(|s| s.class).collect();

        assert_eq!(results[0].entry.name, "Code");
        let mut sorted = classes.clone();
        sorted.sort();
        assert_eq!(classes, sorted);
    }

    #[test]
    fn test_minimum_score_threshold() {
        let long_name = format!("x{}y", "z".repeat(300));
        let entries = vec![Arc::new(Entry::new(long_name, "x", "/x"))];
        let engine = SearchEngine::new(&entries);

        assert!(engine.search("xy", AppType::All, &entries).is_empty());
    }

    #[test]
    fn test_unindexed_entries_are_skipped() {
        let entries = test_entries();
        let engine = SearchEngine::new(&entries[..1]);

        let results = engine.search("fi", AppType::All, &entries);

        assert_eq!(names(&results), vec!["Firefox"]);
    }

    #[test]
    fn test_update_and_remove_index() {
        let entries = test_entries();
        let mut engine = SearchEngine::new(&entries);

        engine.remove_index(&entries[0].path);
        assert_eq!(engine.indexer().count(), 2);
        assert!(!names(&engine.search("firefox", AppType::All, &entries)).contains(&"Firefox"));

        engine.update_index(entries[0].clone());
        assert_eq!(names(&engine.search("firefox", AppType::All, &entries))[0], "Firefox");
    }

    #[test]
    fn test_stable_ties() {
        let entries = vec![
            Arc::new(Entry::new("Term One", "a", "/1")),
            Arc::new(Entry::new("Term Two", "b", "/2")),
            Arc::new(Entry::new("Term Three", "c", "/3")),
        ];
        let engine = SearchEngine::new(&entries);

        for _ in 0..5 {
            let results = engine.search("term", AppType::All, &entries);
            assert_eq!(names(&results), vec!["Term One", "Term Two", "Term Three"]);
        }
    }

    #[test]
    fn test_edit_distance_tiebreak() {
        let entries = vec![
            Arc::new(Entry::new("Term Emulator", "a", "/1")),
            Arc::new(Entry::new("Terms", "b", "/2")),
        ];
        let plain = SearchEngine::new(&entries);
        let tiebreak = SearchEngine::new(&entries).with_edit_distance_tiebreak(true);

        assert_eq!(names(&plain.search("term", AppType::All, &entries))[0], "Term Emulator");
        assert_eq!(names(&tiebreak.search("term", AppType::All, &entries))[0], "Terms");
    }
}
