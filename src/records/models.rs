// Data models: the rows the summarizer reads.
//
// A corpus is either social posts (one `content` column) or news articles
// (`title` + `body` with a source-quality tier). Which one we have is decided
// once at load time and carried as the `Corpus` variant, so nothing
// downstream needs to probe for columns.

use serde::{Deserialize, Serialize};

/// A social-media post: one text column, no source tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub content: String,
    pub sentiment: String,
    /// Comma-separated labels, possibly empty
    pub label: String,
    pub url: Option<String>,
}

/// A news article with a source-quality tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredRecord {
    pub title: String,
    pub body: String,
    pub sentiment: String,
    pub label: String,
    pub tier: Tier,
    pub url: Option<String>,
}

/// Source-quality tier, declared from best to worst.
///
/// The derived `Ord` follows declaration order, so `Tier1 < Tier2 < ...`
/// and sorting ascending puts the preferred source first. `Unranked` covers
/// tier strings outside the known list and is never picked for a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
    /// Missing tier, or an explicit "-"
    #[default]
    Unknown,
    /// Present but empty
    Empty,
    Unranked,
}

impl Tier {
    /// Link-selection priority order. `Unranked` is deliberately absent.
    pub const PRIORITY: [Tier; 5] = [
        Tier::Tier1,
        Tier::Tier2,
        Tier::Tier3,
        Tier::Unknown,
        Tier::Empty,
    ];

    /// Parse a raw tier cell. `None` means the column was missing for this row.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("-") => Tier::Unknown,
            Some("") => Tier::Empty,
            Some("Tier 1") => Tier::Tier1,
            Some("Tier 2") => Tier::Tier2,
            Some("Tier 3") => Tier::Tier3,
            Some(_) => Tier::Unranked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Tier1 => "Tier 1",
            Tier::Tier2 => "Tier 2",
            Tier::Tier3 => "Tier 3",
            Tier::Unknown => "-",
            Tier::Empty => "",
            Tier::Unranked => "?",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which schema a corpus was loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Tiered,
    Untiered,
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Tiered => write!(f, "tiered"),
            SchemaKind::Untiered => write!(f, "untiered"),
        }
    }
}

/// A loaded batch of records, tagged by schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Corpus {
    Tiered(Vec<TieredRecord>),
    Untiered(Vec<Record>),
}

impl Corpus {
    pub fn kind(&self) -> SchemaKind {
        match self {
            Corpus::Tiered(_) => SchemaKind::Tiered,
            Corpus::Untiered(_) => SchemaKind::Untiered,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Corpus::Tiered(rows) => rows.len(),
            Corpus::Untiered(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fields every record exposes to the filters and statistics, regardless of
/// schema.
pub trait Faceted {
    fn sentiment(&self) -> &str;
    fn label(&self) -> &str;

    /// Trimmed, non-empty labels from the comma-separated label cell.
    fn labels(&self) -> Vec<&str> {
        self.label()
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

impl Faceted for Record {
    fn sentiment(&self) -> &str {
        &self.sentiment
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl Faceted for TieredRecord {
    fn sentiment(&self) -> &str {
        &self.sentiment
    }

    fn label(&self) -> &str {
        &self.label
    }
}
