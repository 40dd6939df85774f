//! SearchQuery value object - represents a search query
//!
//! Encapsulates the raw query text plus the lowercase and tokenized forms the
//! search tiers compare against.

/// A search query with its derived forms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    /// The raw query text
    pub text: String,
    /// Lowercase version for matching
    normalized: String,
    /// Alphanumeric tokens of the lowercase text
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let normalized = text.to_lowercase();
        let tokens = tokenize(&text);

        Self {
            text,
            normalized,
            tokens,
        }
    }

    /// Create an empty query
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Get the normalized (lowercase) query text
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Check if the query is empty
    ///
    /// Only the empty string counts; whitespace is a real (if odd) query.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get individual tokens in the query
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SearchQuery {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Split text into lowercase runs of letters and digits
///
/// Every other character is a boundary. No stemming.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = SearchQuery::new("Visual Studio");

        assert_eq!(q.text, "Visual Studio");
        assert_eq!(q.normalized(), "visual studio");
        assert_eq!(q.tokens(), ["visual", "studio"]);
    }

    #[test]
    fn test_query_empty() {
        assert!(SearchQuery::empty().is_empty());
        assert!(!SearchQuery::new(" ").is_empty());
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Browse the Web!"), vec!["browse", "the", "web"]);
        assert_eq!(tokenize("GNU Image-Manipulation_Program v2.10"), vec![
            "gnu", "image", "manipulation", "program", "v2", "10"
        ]);
        assert!(tokenize("  -- ").is_empty());
    }

    #[test]
    fn test_query_from() {
        let q: SearchQuery = "test".into();
        assert_eq!(q.text, "test");
    }
}
