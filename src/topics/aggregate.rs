// Topic aggregation: collapses repeated records into ranked topic rows.
//
// Records are grouped on their trimmed primary text. Each group becomes one
// row with its size, its most common sentiment, and a representative link
// chosen by the record type's link policy (see `traits.rs`).
//
// Output is deterministic: groups are ranked by size descending, ties broken
// by text ascending, and the sentiment mode resolves ties to the value seen
// first in row order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{TopicSource, MISSING};
use crate::records::models::{Corpus, Faceted};

/// One deduplicated topic row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// The shared primary text (trimmed, undecorated)
    pub text: String,
    /// Number of records with this text
    pub count: usize,
    /// Most common sentiment in the group, lowercased, or "-"
    pub sentiment: String,
    /// Representative URL, or "-"
    pub link: String,
}

/// Group records into topic rows, most repeated first.
pub fn aggregate<'a, R>(records: impl IntoIterator<Item = &'a R>) -> Vec<Topic>
where
    R: TopicSource + 'a,
{
    // Groups in first-seen order; the index map points into `groups`.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&R>)> = Vec::new();

    for record in records {
        let key = record.topic_text().trim();
        match index.get(key) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(key, groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    let mut topics: Vec<Topic> = groups
        .into_iter()
        .map(|(key, members)| Topic {
            text: key.to_string(),
            count: members.len(),
            sentiment: sentiment_mode(members.iter().map(|r| r.sentiment()))
                .unwrap_or_else(|| MISSING.to_string()),
            link: R::representative_link(&members),
        })
        .collect();

    topics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)));

    debug!(topics = topics.len(), "Aggregated topics");
    topics
}

/// Aggregate whichever schema the corpus was loaded with.
pub fn aggregate_corpus(corpus: &Corpus) -> Vec<Topic> {
    match corpus {
        Corpus::Tiered(rows) => aggregate(rows),
        Corpus::Untiered(rows) => aggregate(rows),
    }
}

/// Most frequent sentiment, compared case-insensitively and returned
/// lowercased. Blank values are ignored. On a tie the value encountered
/// first wins. `None` when there is nothing to count.
pub fn sentiment_mode<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let value = value.to_lowercase();
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    // `max_by_key` keeps the last maximum, so scan in reverse to keep the first.
    counts
        .into_iter()
        .rev()
        .max_by_key(|(_, n)| *n)
        .map(|(v, _)| v)
}
