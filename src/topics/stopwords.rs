// Stopword sets for the word-frequency table.
//
// The built-in lists come from the `stop-words` crate (stopwords-iso). A
// custom newline-delimited file can replace them; fetching such a file is
// the caller's business.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};

/// Languages with a built-in stopword list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopwordLanguage {
    /// Indonesian, the corpora this tool was built for
    #[default]
    Indonesian,
    English,
}

impl FromStr for StopwordLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" | "indonesian" => Ok(StopwordLanguage::Indonesian),
            "en" | "english" => Ok(StopwordLanguage::English),
            other => anyhow::bail!("Unsupported stopword language '{other}' (expected 'id' or 'en')"),
        }
    }
}

/// A set of lowercased words excluded from frequency counts.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn builtin(language: StopwordLanguage) -> Self {
        let words: Vec<String> = match language {
            StopwordLanguage::Indonesian => get(LANGUAGE::Indonesian),
            StopwordLanguage::English => get(LANGUAGE::English),
        };
        Self::from_words(words)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a list with one word per line. Blank lines and `#` comments are
    /// skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
        Ok(Self::from_words(
            raw.lines().filter(|line| !line.trim_start().starts_with('#')),
        ))
    }

    /// `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
