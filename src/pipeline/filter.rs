// Record filtering: facet pre-filters followed by the keyword query.
//
// Sentiment and label are simple equality facets; the keyword query is the
// boolean mini-language from `crate::query`. Filters keep input order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::{parse, QueryMatcher};
use crate::records::models::{Faceted, Record, TieredRecord};

/// Everything the analyst can narrow a corpus by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    /// Keep records with this sentiment (case-insensitive). `None` keeps all.
    pub sentiment: Option<String>,
    /// Keep records carrying this label. `None` keeps all.
    pub label: Option<String>,
    /// Keyword query; empty matches everything.
    pub query: String,
}

/// A record the keyword query can be evaluated against.
pub trait Searchable {
    fn matches_query(&self, matcher: &QueryMatcher) -> bool;
}

impl Searchable for Record {
    fn matches_query(&self, matcher: &QueryMatcher) -> bool {
        matcher.matches(&self.content)
    }
}

/// Articles match when either the title or the body does.
impl Searchable for TieredRecord {
    fn matches_query(&self, matcher: &QueryMatcher) -> bool {
        matcher.matches(&self.title) || matcher.matches(&self.body)
    }
}

/// Apply sentiment, label and query filters, in that order.
pub fn filter_records<'a, R>(records: &'a [R], facets: &Facets) -> Vec<&'a R>
where
    R: Faceted + Searchable,
{
    let sentiment = facets.sentiment.as_deref().map(str::to_lowercase);
    let matcher = QueryMatcher::new(&parse(&facets.query));

    let kept: Vec<&R> = records
        .iter()
        .filter(|r| match &sentiment {
            Some(s) => r.sentiment().to_lowercase() == *s,
            None => true,
        })
        .filter(|r| match facets.label.as_deref() {
            Some(label) => r.labels().contains(&label),
            None => true,
        })
        .filter(|r| r.matches_query(&matcher))
        .collect();

    debug!(input = records.len(), kept = kept.len(), "Filtered records");
    kept
}

/// Distinct sentiments, lowercased and sorted. Blank values are skipped.
pub fn available_sentiments<R: Faceted>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.sentiment().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct labels across all records, sorted.
pub fn available_labels<R: Faceted>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.labels())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
