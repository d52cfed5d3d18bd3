// Corpus ingestion: turns already-decoded rows into a typed `Corpus`.
//
// Rows arrive as JSON: either one array of objects or JSON Lines. Cells are
// loosely typed (numbers and booleans are stringified, null counts as
// missing). Rows that are not objects, or lines that fail to parse, are
// skipped with a warning rather than failing the whole batch.
//
// The schema is decided once here: a `tier` key on any row makes the whole
// corpus tiered.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::models::{Corpus, Record, Tier, TieredRecord};

type Row = Map<String, Value>;

/// Read and parse a corpus file.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let corpus = parse_corpus(&raw)
        .with_context(|| format!("Failed to parse corpus file {}", path.display()))?;

    info!(
        records = corpus.len(),
        schema = %corpus.kind(),
        path = %path.display(),
        "Loaded corpus"
    );
    Ok(corpus)
}

/// Parse a corpus from JSON array or JSON Lines text.
pub fn parse_corpus(raw: &str) -> Result<Corpus> {
    let rows = if raw.trim_start().starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(raw).context("Corpus is not a valid JSON array")?;
        values
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| into_row(v, i + 1))
            .collect()
    } else {
        parse_lines(raw)
    };

    Ok(corpus_from_rows(rows))
}

fn parse_lines(raw: &str) -> Vec<Row> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| match serde_json::from_str::<Value>(line) {
            Ok(v) => into_row(v, i + 1),
            Err(e) => {
                warn!(line = i + 1, error = %e, "Skipping malformed row");
                None
            }
        })
        .collect()
}

fn into_row(value: Value, position: usize) -> Option<Row> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            warn!(row = position, kind = %json_kind(&other), "Skipping non-object row");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build a typed corpus from decoded rows, choosing the schema once.
pub fn corpus_from_rows(rows: Vec<Row>) -> Corpus {
    let tiered = rows.iter().any(|row| row.contains_key("tier"));
    debug!(rows = rows.len(), tiered, "Detected corpus schema");

    if tiered {
        Corpus::Tiered(rows.iter().map(tiered_record).collect())
    } else {
        Corpus::Untiered(rows.iter().map(record).collect())
    }
}

fn record(row: &Row) -> Record {
    Record {
        content: text(row, "content").unwrap_or_default(),
        sentiment: sentiment(row),
        label: text(row, "label").unwrap_or_default(),
        url: url(row),
    }
}

fn tiered_record(row: &Row) -> TieredRecord {
    TieredRecord {
        title: text(row, "title").unwrap_or_default(),
        body: text(row, "body").unwrap_or_default(),
        sentiment: sentiment(row),
        label: text(row, "label").unwrap_or_default(),
        tier: Tier::parse(cell(row, "tier").as_deref()),
        url: url(row),
    }
}

/// News exports call the column `sentiment`, social exports `final_sentiment`.
fn sentiment(row: &Row) -> String {
    text(row, "sentiment")
        .or_else(|| text(row, "final_sentiment"))
        .unwrap_or_default()
}

fn url(row: &Row) -> Option<String> {
    text(row, "url").filter(|u| !u.is_empty() && u != "-")
}

/// A text cell with exporter quoting (`'...'`) stripped.
fn text(row: &Row, key: &str) -> Option<String> {
    cell(row, key).map(|s| s.trim_matches('\'').to_string())
}

fn cell(row: &Row, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
