use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::topics::frequency::DEFAULT_LIMIT;
use crate::topics::stopwords::{StopwordLanguage, StopwordSet};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Custom stopword list (RINGKAS_STOPWORDS_FILE); replaces the built-in list
    pub stopwords_file: Option<PathBuf>,
    /// Built-in stopword language (RINGKAS_STOPWORDS_LANG, default "id")
    pub stopwords_language: StopwordLanguage,
    /// Size of the word-frequency table (RINGKAS_WORDCLOUD_LIMIT, default 500)
    pub word_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords_file: None,
            stopwords_language: StopwordLanguage::default(),
            word_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so this only fails on values that are
    /// present but unusable (an unknown stopword language).
    pub fn load() -> Result<Self> {
        let stopwords_language = match env::var("RINGKAS_STOPWORDS_LANG") {
            Ok(lang) if !lang.trim().is_empty() => lang.parse()?,
            _ => StopwordLanguage::default(),
        };

        Ok(Self {
            stopwords_file: env::var("RINGKAS_STOPWORDS_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            stopwords_language,
            word_limit: parse_limit(env::var("RINGKAS_WORDCLOUD_LIMIT").ok().as_deref()),
        })
    }

    /// Build the stopword set this configuration asks for.
    pub fn stopwords(&self) -> Result<StopwordSet> {
        match &self.stopwords_file {
            Some(path) => {
                let set = StopwordSet::from_file(path)?;
                info!(path = %path.display(), words = set.len(), "Loaded custom stopwords");
                Ok(set)
            }
            None => Ok(StopwordSet::builtin(self.stopwords_language)),
        }
    }
}

/// Parse the word-table limit, falling back to the default on junk or zero.
fn parse_limit(raw: Option<&str>) -> usize {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_LIMIT,
        Some(value) => match value.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!(value, "Invalid RINGKAS_WORDCLOUD_LIMIT, using {DEFAULT_LIMIT}");
                DEFAULT_LIMIT
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some(" 50 ")), 50);
        assert_eq!(parse_limit(Some("0")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("lots")), DEFAULT_LIMIT);
    }

    #[test]
    fn test_custom_stopword_file_wins() {
        let path = std::env::temp_dir().join("ringkas-config-stopwords.txt");
        std::fs::write(&path, "banjir\n").unwrap();
        let config = Config {
            stopwords_file: Some(path.clone()),
            ..Default::default()
        };
        let set = config.stopwords().unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("banjir"));
        let _ = std::fs::remove_file(&path);
    }
}
