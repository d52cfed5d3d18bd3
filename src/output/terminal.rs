// Colored terminal output for topic summaries.
//
// This module handles all terminal-specific formatting: colors and tables.
// The main.rs command handlers delegate here.

use colored::Colorize;

use crate::pipeline::stats::SentimentBreakdown;
use crate::pipeline::summarize::Summary;
use crate::records::models::SchemaKind;
use crate::topics::aggregate::Topic;
use crate::topics::frequency::TokenFrequency;
use crate::topics::highlight::Highlighter;

/// Longest topic text shown in a table row before truncation.
pub const TOPIC_PREVIEW_CHARS: usize = 100;

/// Display a full summary: stats, topic table, and word table if present.
pub fn display_summary(summary: &Summary, highlighter: &Highlighter) {
    display_stats(&summary.stats, summary.schema);
    display_topics(&summary.topics, summary.schema, highlighter);
    if let Some(words) = &summary.words {
        display_words(words);
    }
}

/// Display the sentiment breakdown.
pub fn display_stats(stats: &SentimentBreakdown, schema: SchemaKind) {
    let noun = match schema {
        SchemaKind::Tiered => "articles",
        SchemaKind::Untiered => "posts",
    };
    println!("\n{}", format!("=== {} {} matched ===", stats.total, noun).bold());
    println!(
        "  {} {}  |  {} {}  |  {} {}",
        "positive".green(),
        stats.positive,
        "neutral".dimmed(),
        stats.neutral,
        "negative".red(),
        stats.negative,
    );
    if stats.other() > 0 {
        println!("  {}", format!("{} with other or no sentiment", stats.other()).dimmed());
    }
}

/// Display the ranked topic table.
pub fn display_topics(topics: &[Topic], schema: SchemaKind, highlighter: &Highlighter) {
    let heading = match schema {
        SchemaKind::Tiered => "Topic Summary",
        SchemaKind::Untiered => "Conversation Summary",
    };

    if topics.is_empty() {
        println!("\nNo records match the current filters.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {} ({} topics) ===", heading, topics.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:>6}  {:<10}  {}",
        "Rank".dimmed(),
        "Count".dimmed(),
        "Sentiment".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, topic) in topics.iter().enumerate() {
        let preview = super::truncate_chars(&super::single_line(&topic.text), TOPIC_PREVIEW_CHARS);
        let text = highlighter.apply_with(&preview, |m| m.yellow().bold().to_string());

        // Pad before coloring; ANSI codes would throw off the width.
        let sentiment = format!("{:<10}", topic.sentiment);
        println!(
            "  {:>4}. {:>6}  {}  {}",
            i + 1,
            topic.count,
            colorize_sentiment(&sentiment, &topic.sentiment),
            text,
        );
        if topic.link != crate::topics::traits::MISSING {
            println!("  {:>4}  {:>6}  {}", "", "", topic.link.dimmed());
        }
    }
}

/// Display the word-frequency table.
pub fn display_words(words: &[TokenFrequency]) {
    println!(
        "\n{}",
        format!("=== Word Frequencies (top {}) ===", words.len()).bold()
    );
    println!();

    if words.is_empty() {
        println!("  {}", "No words left after stopword filtering.".dimmed());
        return;
    }

    for (i, entry) in words.iter().enumerate() {
        println!("  {:>4}. {:<30} {:>6}", i + 1, entry.word, entry.count);
    }
}

/// Display the distinct sentiments and labels available as facets.
pub fn display_facets(sentiments: &[String], labels: &[String]) {
    println!("\n{}", "=== Sentiments ===".bold());
    if sentiments.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for s in sentiments {
        println!("  {}", colorize_sentiment(s, s));
    }

    println!("\n{}", "=== Labels ===".bold());
    if labels.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for label in labels {
        println!("  {label}");
    }
}

/// Color `shown` according to the sentiment value `sentiment`.
fn colorize_sentiment(shown: &str, sentiment: &str) -> colored::ColoredString {
    match sentiment {
        "positive" => shown.green().bold(),
        "negative" => shown.red().bold(),
        "neutral" => shown.dimmed().bold(),
        _ => shown.normal(),
    }
}
