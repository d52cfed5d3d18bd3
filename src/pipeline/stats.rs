// Sentiment breakdown shown beside the topic table.

use serde::{Deserialize, Serialize};

use crate::records::models::Faceted;

/// Record counts by sentiment for a filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    pub fn from_records<'a, R>(records: impl IntoIterator<Item = &'a R>) -> Self
    where
        R: Faceted + 'a,
    {
        let mut stats = Self::default();
        for record in records {
            stats.total += 1;
            match record.sentiment().trim().to_lowercase().as_str() {
                "positive" => stats.positive += 1,
                "neutral" => stats.neutral += 1,
                "negative" => stats.negative += 1,
                _ => {}
            }
        }
        stats
    }

    /// Records whose sentiment is none of the three known values.
    pub fn other(&self) -> usize {
        self.total - self.positive - self.neutral - self.negative
    }
}
