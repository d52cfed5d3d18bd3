// Word-frequency table for the word cloud.
//
// The text is lowercased first, then split into maximal runs of word
// characters (letters, digits, underscore); runs of three or more count. Stopwords are dropped, the
// rest counted. Ranking is by count descending; equal counts keep the order
// in which the words first appeared.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stopwords::StopwordSet;

/// Default size of the frequency table.
pub const DEFAULT_LIMIT: usize = 500;

/// Shortest token that is counted.
pub const MIN_TOKEN_CHARS: usize = 3;

/// One word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFrequency {
    pub word: String,
    pub count: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word tokens of at least `MIN_TOKEN_CHARS` characters from the lowercased text.
///
/// Lowercasing happens before splitting because some case mappings expand
/// into several chars, and the split must see the expanded form.
pub fn extract_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Count words across `corpus` and return the `limit` most frequent.
///
/// The texts are treated as one stream joined by spaces, so a token never
/// spans two texts.
pub fn tokenize_and_rank<S: AsRef<str>>(
    corpus: &[S],
    stopwords: &StopwordSet,
    limit: usize,
) -> Vec<TokenFrequency> {
    // word -> (count, first-seen position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut seen = 0usize;

    for text in corpus {
        for word in extract_words(text.as_ref()) {
            if stopwords.contains(&word) {
                continue;
            }
            let entry = counts.entry(word).or_insert((0, seen));
            if entry.0 == 0 {
                seen += 1;
            }
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(limit);

    debug!(distinct = seen, kept = ranked.len(), "Ranked word frequencies");

    ranked
        .into_iter()
        .map(|(word, (count, _))| TokenFrequency { word, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_words_min_length_and_case() {
        let words = extract_words("Di JAKARTA, hujan_deras 42 kali!");
        assert_eq!(words, vec!["jakarta", "hujan_deras", "kali"]);
    }

    #[test]
    fn test_extract_words_unicode_letters() {
        let words = extract_words("Café überall");
        assert_eq!(words, vec!["café", "überall"]);
    }

    #[test]
    fn test_extract_words_same_as_lowercased_input() {
        for text in ["İSTANBUL Macet", "ΣΟΦΊΑ ΟΔΟΣ", "JALAN Ḱ_TOL"] {
            assert_eq!(extract_words(text), extract_words(&text.to_lowercase()));
        }
    }

    #[test]
    fn test_rank_stable_on_ties() {
        let corpus = ["beta alpha gamma", "gamma alpha"];
        let ranked = tokenize_and_rank(&corpus, &StopwordSet::default(), DEFAULT_LIMIT);
        let words: Vec<&str> = ranked.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["alpha", "gamma", "beta"]);
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn test_stopwords_removed() {
        let stop = StopwordSet::from_words(["yang"]);
        let ranked = tokenize_and_rank(&["yang Yang banjir"], &stop, DEFAULT_LIMIT);
        assert_eq!(
            ranked,
            vec![TokenFrequency {
                word: "banjir".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn test_limit_truncates() {
        let text: String = (0..20).map(|i| format!("word{i:02} ")).collect();
        let ranked = tokenize_and_rank(&[text], &StopwordSet::default(), 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].word, "word00");
    }

    #[test]
    fn test_texts_do_not_join() {
        let ranked = tokenize_and_rank(&["ab", "cd"], &StopwordSet::default(), DEFAULT_LIMIT);
        assert!(ranked.is_empty());
    }
}
