// Markdown report generation.
//
// Writes the same tables the terminal shows into a Markdown file that can be
// pasted into a doc or rendered on a wiki. Highlighted terms are bolded and
// links become `[Link](url)` anchors.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::filter::Facets;
use crate::pipeline::summarize::Summary;
use crate::records::models::SchemaKind;
use crate::topics::highlight::Highlighter;
use crate::topics::traits::MISSING;

/// Render a summary as Markdown.
pub fn render_report(
    summary: &Summary,
    facets: &Facets,
    highlighter: &Highlighter,
    generated_at: &str,
) -> String {
    let mut out = String::new();
    let (title, noun) = match summary.schema {
        SchemaKind::Tiered => ("Topic Summary", "Articles"),
        SchemaKind::Untiered => ("Conversation Summary", "Posts"),
    };

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# {title}\n");
    let _ = writeln!(out, "_Generated {generated_at}_\n");

    let _ = writeln!(out, "## Filters\n");
    let _ = writeln!(
        out,
        "- Sentiment: {}",
        facets.sentiment.as_deref().unwrap_or("All")
    );
    let _ = writeln!(out, "- Label: {}", facets.label.as_deref().unwrap_or("All"));
    if facets.query.trim().is_empty() {
        let _ = writeln!(out, "- Query: (none)");
    } else {
        let _ = writeln!(out, "- Query: `{}`", facets.query.replace('`', "'"));
    }
    let _ = writeln!(out);

    let stats = &summary.stats;
    let _ = writeln!(out, "## Statistics\n");
    let _ = writeln!(out, "- Total {}: {}", noun.to_lowercase(), stats.total);
    let _ = writeln!(
        out,
        "- Positive: {} | Neutral: {} | Negative: {}\n",
        stats.positive, stats.neutral, stats.negative
    );

    let _ = writeln!(out, "## {title}\n");
    if summary.topics.is_empty() {
        let _ = writeln!(out, "_No records match the current filters._\n");
    } else {
        let _ = writeln!(out, "| Text | {noun} | Sentiment | Link |");
        let _ = writeln!(out, "|---|---:|---|---|");
        for topic in &summary.topics {
            let text = highlighter.apply_with(&escape_cell(&topic.text), |m| format!("**{m}**"));
            let link = if topic.link == MISSING {
                MISSING.to_string()
            } else {
                format!("[Link]({})", topic.link.replace(')', "%29"))
            };
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                text, topic.count, topic.sentiment, link
            );
        }
        let _ = writeln!(out);
    }

    if let Some(words) = &summary.words {
        let _ = writeln!(out, "## Word Frequencies (top {})\n", words.len());
        let _ = writeln!(out, "| Word | Count |");
        let _ = writeln!(out, "|---|---:|");
        for entry in words {
            let _ = writeln!(out, "| {} | {} |", entry.word, entry.count);
        }
        let _ = writeln!(out);
    }

    out
}

/// Render and write a report, returning the path written.
pub fn generate_report(
    summary: &Summary,
    facets: &Facets,
    highlighter: &Highlighter,
    path: &str,
) -> Result<String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
        }
    }

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let report = render_report(summary, facets, highlighter, &generated_at);
    std::fs::write(path, report).with_context(|| format!("Failed to write report to {path}"))?;

    info!(path, topics = summary.topics.len(), "Wrote Markdown report");
    Ok(path.to_string())
}

/// Make text safe for a single Markdown table cell.
fn escape_cell(text: &str) -> String {
    super::single_line(text).replace('|', "\\|")
}
