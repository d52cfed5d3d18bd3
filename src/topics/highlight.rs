// Highlighting of analyst-chosen words in topic text.
//
// Pure display decoration: it runs on finished topic rows and never feeds
// back into grouping. All terms are matched in a single case-insensitive
// pass over the original text, longest term first, so a marker inserted for
// one term can never be matched by another.

use regex_lite::{Captures, Regex};
use tracing::warn;

/// A compiled set of highlight terms.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    terms: Vec<String>,
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build from the highlight input box: whitespace-separated words or
    /// quoted phrases.
    pub fn parse(input: &str) -> Self {
        let mut terms: Vec<String> = Vec::new();
        for token in terms_in(input) {
            let term = token.trim_matches('"').to_lowercase();
            if !term.is_empty() && !terms.contains(&term) {
                terms.push(term);
            }
        }
        Self::from_terms(terms)
    }

    pub fn from_terms(mut terms: Vec<String>) -> Self {
        if terms.is_empty() {
            return Self::default();
        }
        // Longest first so the alternation prefers "jakarta utara" to "jakarta".
        terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

        let alternation: Vec<String> = terms.iter().map(|t| regex_lite::escape(t)).collect();
        let pattern = match Regex::new(&format!("(?i)(?:{})", alternation.join("|"))) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Could not compile highlight terms, highlighting disabled");
                None
            }
        };

        Self { terms, pattern }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Replace every match with `decorate(matched_text)`.
    pub fn apply_with<F>(&self, text: &str, mut decorate: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        match &self.pattern {
            Some(re) => re
                .replace_all(text, |caps: &Captures<'_>| decorate(&caps[0]))
                .into_owned(),
            None => text.to_string(),
        }
    }

    /// Wrap every match in `open` ... `close`.
    pub fn apply(&self, text: &str, open: &str, close: &str) -> String {
        self.apply_with(text, |m| format!("{open}{m}{close}"))
    }
}

/// Quoted phrases or whitespace-separated words.
fn terms_in(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let len = match rest.strip_prefix('"').and_then(|body| body.find('"')) {
            Some(end) if end > 0 => end + 2,
            _ => rest.find(char::is_whitespace).unwrap_or(rest.len()),
        };
        tokens.push(&rest[..len]);
        rest = rest[len..].trim_start();
    }

    tokens
}
