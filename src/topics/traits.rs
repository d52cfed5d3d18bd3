// Topic source trait: what the aggregator needs from a record.
//
// Both record schemas group on their primary text, but they pick the
// representative link differently: tiered news prefers the best source tier,
// social posts take the first link they find. Each schema implements its own
// policy here, so the choice is fixed by the record type at compile time.

use crate::records::models::{Faceted, Record, Tier, TieredRecord};

/// Placeholder for a missing sentiment or link.
pub const MISSING: &str = "-";

/// A record that can be collapsed into a topic row.
pub trait TopicSource: Faceted {
    /// The text topics are grouped on (before whitespace trimming).
    fn topic_text(&self) -> &str;

    /// Choose the link that represents a group of records sharing a topic.
    /// `group` is in original row order and never empty.
    fn representative_link(group: &[&Self]) -> String
    where
        Self: Sized;

    /// The texts fed to the word-frequency table, in scan order.
    fn word_texts<'a>(rows: &[&'a Self]) -> Vec<&'a str>
    where
        Self: Sized;
}

impl TopicSource for Record {
    fn topic_text(&self) -> &str {
        &self.content
    }

    /// First non-empty URL in row order.
    fn representative_link(group: &[&Self]) -> String {
        group
            .iter()
            .find_map(|r| r.url.as_deref().filter(|u| !u.is_empty()))
            .unwrap_or(MISSING)
            .to_string()
    }

    fn word_texts<'a>(rows: &[&'a Self]) -> Vec<&'a str> {
        rows.iter().copied().map(|r| r.content.as_str()).collect()
    }
}

impl TopicSource for TieredRecord {
    fn topic_text(&self) -> &str {
        &self.title
    }

    /// Link from the best-tier source present in the group.
    ///
    /// The first priority level with any member decides; within it the first
    /// row with a URL wins. Lower tiers are not consulted even if the winning
    /// level has no URL.
    fn representative_link(group: &[&Self]) -> String {
        Tier::PRIORITY
            .iter()
            .find_map(|tier| {
                let mut members = group.iter().filter(|r| r.tier == *tier).peekable();
                members.peek()?;
                Some(
                    members
                        .find_map(|r| r.url.as_deref().filter(|u| !u.is_empty()))
                        .unwrap_or(MISSING)
                        .to_string(),
                )
            })
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// All titles, then all bodies.
    fn word_texts<'a>(rows: &[&'a Self]) -> Vec<&'a str> {
        rows.iter()
            .copied()
            .map(|r| r.title.as_str())
            .chain(rows.iter().copied().map(|r| r.body.as_str()))
            .collect()
    }
}
