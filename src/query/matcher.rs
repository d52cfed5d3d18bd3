// Query evaluation against a single text field.
//
// Matching is case-insensitive substring containment, not word-boundary
// matching: "tax" matches "taxes" and "syntax". Checks run cheapest-reject
// first: exclusions, then phrases, then OR-groups.

use super::parser::Query;

/// A query with every term lowercased once, ready to test many texts.
#[derive(Debug, Clone, Default)]
pub struct QueryMatcher {
    include_groups: Vec<Vec<String>>,
    exact_phrases: Vec<String>,
    excludes: Vec<String>,
}

impl QueryMatcher {
    pub fn new(query: &Query) -> Self {
        Self {
            include_groups: query.include_groups.iter().map(|g| lowercase_all(g)).collect(),
            exact_phrases: lowercase_all(&query.exact_phrases),
            excludes: lowercase_all(&query.excludes),
        }
    }

    /// True when the matcher places no constraint.
    pub fn is_open(&self) -> bool {
        self.include_groups.is_empty() && self.exact_phrases.is_empty() && self.excludes.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.is_open() {
            return true;
        }
        let text = text.to_lowercase();

        if self.excludes.iter().any(|word| text.contains(word.as_str())) {
            return false;
        }
        if !self
            .exact_phrases
            .iter()
            .all(|phrase| text.contains(phrase.as_str()))
        {
            return false;
        }
        self.include_groups
            .iter()
            .all(|group| group.iter().any(|word| text.contains(word.as_str())))
    }
}

fn lowercase_all(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

/// Evaluate `query` against `text`.
///
/// Convenience for one-off checks; filters over many records should build a
/// `QueryMatcher` once.
pub fn matches(text: &str, query: &Query) -> bool {
    QueryMatcher::new(query).matches(text)
}
