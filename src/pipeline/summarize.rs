// Summary pipeline: filter a corpus, then build the topic table, the
// sentiment breakdown and (optionally) the word-frequency table.
//
// Every input arrives as an argument; nothing is cached between calls, so
// the same corpus and facets always produce the same summary.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::filter::{filter_records, Facets, Searchable};
use super::stats::SentimentBreakdown;
use crate::records::models::{Corpus, SchemaKind};
use crate::topics::aggregate::{aggregate, Topic};
use crate::topics::frequency::{tokenize_and_rank, TokenFrequency, DEFAULT_LIMIT};
use crate::topics::stopwords::StopwordSet;
use crate::topics::traits::TopicSource;

/// Which records the word-frequency table counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCloudBase {
    /// Only records that survived the filters
    #[default]
    Filtered,
    /// The whole corpus, ignoring filters
    Full,
}

/// Knobs for one summary run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    /// `None` skips the word-frequency table entirely.
    pub word_cloud: Option<WordCloudBase>,
    pub word_limit: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            word_cloud: None,
            word_limit: DEFAULT_LIMIT,
        }
    }
}

/// Everything the summary view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub schema: SchemaKind,
    pub stats: SentimentBreakdown,
    pub topics: Vec<Topic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<TokenFrequency>>,
}

/// Summarize a corpus under the given facets.
pub fn summarize(
    corpus: &Corpus,
    facets: &Facets,
    options: &SummaryOptions,
    stopwords: &StopwordSet,
) -> Summary {
    let (stats, topics, words) = match corpus {
        Corpus::Tiered(rows) => summarize_rows(rows, facets, options, stopwords),
        Corpus::Untiered(rows) => summarize_rows(rows, facets, options, stopwords),
    };

    info!(
        schema = %corpus.kind(),
        records = corpus.len(),
        matched = stats.total,
        topics = topics.len(),
        "Summarized corpus"
    );

    Summary {
        schema: corpus.kind(),
        stats,
        topics,
        words,
    }
}

/// Only the word-frequency table, under the given facets.
pub fn word_frequencies(
    corpus: &Corpus,
    facets: &Facets,
    base: WordCloudBase,
    limit: usize,
    stopwords: &StopwordSet,
) -> Vec<TokenFrequency> {
    match corpus {
        Corpus::Tiered(rows) => rank_rows(rows, facets, base, limit, stopwords),
        Corpus::Untiered(rows) => rank_rows(rows, facets, base, limit, stopwords),
    }
}

fn summarize_rows<R>(
    rows: &[R],
    facets: &Facets,
    options: &SummaryOptions,
    stopwords: &StopwordSet,
) -> (SentimentBreakdown, Vec<Topic>, Option<Vec<TokenFrequency>>)
where
    R: TopicSource + Searchable,
{
    let filtered = filter_records(rows, facets);
    let stats = SentimentBreakdown::from_records(filtered.iter().copied());
    let topics = aggregate(filtered.iter().copied());

    let words = options.word_cloud.map(|base| {
        let texts = match base {
            WordCloudBase::Filtered => R::word_texts(&filtered),
            WordCloudBase::Full => R::word_texts(&rows.iter().collect::<Vec<_>>()),
        };
        tokenize_and_rank(&texts, stopwords, options.word_limit)
    });

    (stats, topics, words)
}

fn rank_rows<R>(
    rows: &[R],
    facets: &Facets,
    base: WordCloudBase,
    limit: usize,
    stopwords: &StopwordSet,
) -> Vec<TokenFrequency>
where
    R: TopicSource + Searchable,
{
    let selected: Vec<&R> = match base {
        WordCloudBase::Filtered => filter_records(rows, facets),
        WordCloudBase::Full => rows.iter().collect(),
    };
    tokenize_and_rank(&R::word_texts(&selected), stopwords, limit)
}
