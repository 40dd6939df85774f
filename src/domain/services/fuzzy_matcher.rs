//! FuzzyMatcher - fuzzy string matching algorithm
//!
//! Greedy subsequence matching: the text is scanned left to right and the
//! next pattern character is consumed as soon as it appears. Only this first
//! alignment is scored, never the best one; two alignments of the same
//! pattern can score differently and the greedy one is what callers get.
//!
//! Scoring happens on the compared (normalized) characters. In the default
//! case-insensitive mode both sides are lowercased first, so the camel-case
//! bonus only fires for case-sensitive matchers.

/// Result of a successful fuzzy match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// Match score (higher is better, may be negative)
    pub score: i32,
    /// Character indices of matched positions in the target
    pub matched_indices: Vec<usize>,
}

impl MatchResult {
    /// Create a matching result
    pub fn new(score: i32, matched_indices: Vec<usize>) -> Self {
        Self {
            score,
            matched_indices,
        }
    }
}

/// Fuzzy string matcher
#[derive(Clone, Debug)]
pub struct FuzzyMatcher {
    /// Points per pattern character
    pub base_per_char: i32,
    /// Bonus for a match at text index 0
    pub first_char_bonus: i32,
    /// Bonus for a match directly after the previous one
    pub consecutive_bonus: i32,
    /// Extra bonus per position of the current consecutive run
    pub run_step_bonus: i32,
    /// Bonus for a match right after a separator
    pub separator_bonus: i32,
    /// Bonus for a lowercase to uppercase transition
    pub camel_case_bonus: i32,
    /// Bonus for a digit to non-digit transition
    pub digit_boundary_bonus: i32,
    /// Penalty per skipped character between matches
    pub gap_penalty: i32,
    case_sensitive: bool,
}

impl FuzzyMatcher {
    /// Create a new case-insensitive fuzzy matcher with default settings
    pub fn new() -> Self {
        Self {
            base_per_char: 10,
            first_char_bonus: 15,
            consecutive_bonus: 15,
            run_step_bonus: 5,
            separator_bonus: 20,
            camel_case_bonus: 15,
            digit_boundary_bonus: 10,
            gap_penalty: 2,
            case_sensitive: false,
        }
    }

    /// Builder pattern: set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Match a pattern against a target string
    ///
    /// Returns `None` unless every pattern character appears in order. An
    /// empty pattern matches everything with a score of zero.
    pub fn fuzzy_match(&self, pattern: &str, target: &str) -> Option<MatchResult> {
        if pattern.is_empty() {
            return Some(MatchResult::new(0, Vec::new()));
        }

        let pattern_chars = self.normalize(pattern);
        let target_chars = self.normalize(target);

        let matched_indices = find_matches(&pattern_chars, &target_chars)?;
        let score = self.score(&pattern_chars, &target_chars, &matched_indices);

        Some(MatchResult::new(score, matched_indices))
    }

    fn normalize(&self, text: &str) -> Vec<char> {
        if self.case_sensitive {
            text.chars().collect()
        } else {
            // One lowercase char per input char keeps indices aligned with the target
            text.chars()
                .map(|c| c.to_lowercase().next().unwrap_or(c))
                .collect()
        }
    }

    fn score(&self, pattern: &[char], text: &[char], matched_indices: &[usize]) -> i32 {
        let mut score = pattern.len() as i32 * self.base_per_char;
        let mut run = 0;
        let mut previous: Option<usize> = None;

        for &idx in matched_indices {
            if idx == 0 {
                score += self.first_char_bonus;
            }

            match previous {
                Some(prev) if prev + 1 == idx => {
                    run += 1;
                    score += self.consecutive_bonus + run * self.run_step_bonus;
                }
                _ => run = 0,
            }

            if idx > 0 {
                let prev_char = text[idx - 1];
                let curr_char = text[idx];

                if is_separator(prev_char) {
                    score += self.separator_bonus;
                } else if prev_char.is_lowercase() && curr_char.is_uppercase() {
                    score += self.camel_case_bonus;
                } else if prev_char.is_ascii_digit() && !curr_char.is_ascii_digit() {
                    score += self.digit_boundary_bonus;
                }
            }

            if let Some(prev) = previous {
                let gap = (idx - prev - 1) as i32;
                score -= gap * self.gap_penalty;
            }

            previous = Some(idx);
        }

        let pattern_len = pattern.len() as f64;
        let text_len = text.len() as f64;

        // Share of the text covered by the pattern
        score += (pattern_len / text_len * 50.0) as i32;

        // Long texts relative to the pattern lose points
        let length_ratio = text_len / pattern_len;
        if length_ratio > 3.0 {
            score -= ((length_ratio - 3.0) * 5.0) as i32;
        }

        score
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// First, left-to-right alignment of `pattern` inside `text`
fn find_matches(pattern: &[char], text: &[char]) -> Option<Vec<usize>> {
    let mut matched = Vec::with_capacity(pattern.len());
    let mut pattern_idx = 0;

    for (text_idx, &c) in text.iter().enumerate() {
        if pattern_idx == pattern.len() {
            break;
        }
        if c == pattern[pattern_idx] {
            matched.push(text_idx);
            pattern_idx += 1;
        }
    }

    (pattern_idx == pattern.len()).then_some(matched)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '/' | '.' | ':')
}
