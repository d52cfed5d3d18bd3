use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use ringkas::config::Config;
use ringkas::pipeline::filter::Facets;
use ringkas::pipeline::summarize::{SummaryOptions, WordCloudBase};
use ringkas::records::models::Corpus;

/// Ringkas: topic summaries for news and social-media exports.
///
/// Narrows a batch of records with a keyword query, then collapses repeated
/// records into ranked topics and a word-frequency table.
#[derive(Parser)]
#[command(name = "ringkas", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize records into ranked topics
    Summary {
        /// Records as a JSON array or JSON Lines
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Words or "quoted phrases" to highlight in topic text
        #[arg(long, default_value = "")]
        highlight: String,

        /// Also show the word-frequency table
        #[arg(long)]
        words: bool,

        /// Count words over the whole file instead of the filtered records
        #[arg(long)]
        static_words: bool,

        /// Size of the word-frequency table (default: 500)
        #[arg(long, value_parser = positive_limit())]
        limit: Option<usize>,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Also write a Markdown report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Show only the word-frequency table
    Words {
        /// Records as a JSON array or JSON Lines
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Count words over the whole file instead of the filtered records
        #[arg(long)]
        static_words: bool,

        /// Size of the word-frequency table (default: 500)
        #[arg(long, value_parser = positive_limit())]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the sentiments and labels available for filtering
    Facets {
        /// Records as a JSON array or JSON Lines
        file: PathBuf,

        /// Print JSON instead of lists
        #[arg(long)]
        json: bool,
    },

    /// Show how a keyword query is parsed
    Query {
        /// e.g. '"harga beras" (naik OR mahal) -hoaks'
        query: String,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Keyword query: word, "exact phrase", (a OR b), -exclude, -(x y)
    #[arg(long, short, default_value = "")]
    query: String,

    /// Only records with this sentiment ("all" for no filter)
    #[arg(long)]
    sentiment: Option<String>,

    /// Only records carrying this label ("all" for no filter)
    #[arg(long)]
    label: Option<String>,
}

impl FilterArgs {
    fn facets(&self) -> Facets {
        let facet = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
                .map(str::to_string)
        };
        Facets {
            sentiment: facet(&self.sentiment),
            label: facet(&self.label),
            query: self.query.clone(),
        }
    }
}

#[derive(Serialize)]
struct FacetList {
    sentiments: Vec<String>,
    labels: Vec<String>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging on stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ringkas=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            file,
            filters,
            highlight,
            words,
            static_words,
            limit,
            json,
            report,
        } => {
            let config = Config::load()?;
            let corpus = load_nonempty(&file)?;
            let facets = filters.facets();
            let highlighter = ringkas::topics::highlight::Highlighter::parse(&highlight);

            let options = SummaryOptions {
                word_cloud: words.then_some(word_cloud_base(static_words)),
                word_limit: limit.unwrap_or(config.word_limit),
            };
            let stopwords = if words {
                config.stopwords()?
            } else {
                ringkas::topics::stopwords::StopwordSet::default()
            };

            let summary =
                ringkas::pipeline::summarize::summarize(&corpus, &facets, &options, &stopwords);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                ringkas::output::terminal::display_summary(&summary, &highlighter);
            }

            if let Some(path) = report {
                let written = ringkas::output::markdown::generate_report(
                    &summary,
                    &facets,
                    &highlighter,
                    &path,
                )?;
                if !json {
                    println!(
                        "\n{}",
                        format!("Markdown report saved to: {written}").bold()
                    );
                }
            }
        }

        Commands::Words {
            file,
            filters,
            static_words,
            limit,
            json,
        } => {
            let config = Config::load()?;
            let corpus = load_nonempty(&file)?;
            let stopwords = config.stopwords()?;

            let words = ringkas::pipeline::summarize::word_frequencies(
                &corpus,
                &filters.facets(),
                word_cloud_base(static_words),
                limit.unwrap_or(config.word_limit),
                &stopwords,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else {
                ringkas::output::terminal::display_words(&words);
            }
        }

        Commands::Facets { file, json } => {
            let corpus = load_nonempty(&file)?;
            let facets = match &corpus {
                Corpus::Tiered(rows) => FacetList {
                    sentiments: ringkas::pipeline::filter::available_sentiments(rows),
                    labels: ringkas::pipeline::filter::available_labels(rows),
                },
                Corpus::Untiered(rows) => FacetList {
                    sentiments: ringkas::pipeline::filter::available_sentiments(rows),
                    labels: ringkas::pipeline::filter::available_labels(rows),
                },
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&facets)?);
            } else {
                ringkas::output::terminal::display_facets(&facets.sentiments, &facets.labels);
            }
        }

        Commands::Query { query } => {
            let parsed = ringkas::query::parse(&query);
            if parsed.is_empty() {
                info!("Empty query matches every record");
            }
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }

    Ok(())
}

/// Load a corpus, bailing with a hint when it has no usable rows.
fn load_nonempty(file: &std::path::Path) -> Result<Corpus> {
    let corpus = ringkas::records::ingest::load_corpus(file)?;
    if corpus.is_empty() {
        anyhow::bail!(
            "No records found in {}.\n\
             Expected a JSON array of objects or one JSON object per line.",
            file.display()
        );
    }
    Ok(corpus)
}

/// Word-table sizes must be at least 1.
fn positive_limit() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
}

fn word_cloud_base(static_words: bool) -> WordCloudBase {
    if static_words {
        WordCloudBase::Full
    } else {
        WordCloudBase::Filtered
    }
}
