// Unit tests for topic aggregation and word frequencies.
//
// Tests isolated pure functions: aggregate() counts, sentiment mode and both
// link policies, and tokenize_and_rank() filtering, ordering and limits.

use ringkas::records::models::{Record, Tier, TieredRecord};
use ringkas::topics::aggregate::{aggregate, sentiment_mode};
use ringkas::topics::frequency::{tokenize_and_rank, DEFAULT_LIMIT};
use ringkas::topics::stopwords::StopwordSet;
use ringkas::topics::traits::MISSING;

fn post(content: &str, sentiment: &str, url: Option<&str>) -> Record {
    Record {
        content: content.to_string(),
        sentiment: sentiment.to_string(),
        label: String::new(),
        url: url.map(str::to_string),
    }
}

fn article(title: &str, sentiment: &str, tier: Tier, url: &str) -> TieredRecord {
    TieredRecord {
        title: title.to_string(),
        body: String::new(),
        sentiment: sentiment.to_string(),
        label: String::new(),
        tier,
        url: Some(url.to_string()),
    }
}

// ============================================================
// aggregate: counts and ordering
// ============================================================

#[test]
fn counts_sum_to_record_count() {
    let rows = vec![
        post("A", "positive", None),
        post("B", "negative", None),
        post("A", "neutral", None),
        post("C", "", None),
        post("A ", "positive", None),
        post("B", "negative", None),
    ];
    let topics = aggregate(&rows);
    let total: usize = topics.iter().map(|t| t.count).sum();
    assert_eq!(total, rows.len());
    assert!(topics.iter().all(|t| t.count >= 1));
}

#[test]
fn topics_sorted_by_count_descending() {
    let rows = vec![
        post("one", "", None),
        post("three", "", None),
        post("two", "", None),
        post("three", "", None),
        post("two", "", None),
        post("three", "", None),
    ];
    let counts: Vec<usize> = aggregate(&rows).iter().map(|t| t.count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
}

#[test]
fn mode_example_case_folded() {
    let rows = vec![
        post("A", "Positive", None),
        post("A", "Positive", None),
        post("A", "Negative", None),
    ];
    let topics = aggregate(&rows);
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].text, "A");
    assert_eq!(topics[0].count, 3);
    assert_eq!(topics[0].sentiment, "positive");
}

#[test]
fn mode_tie_takes_first_in_group_order() {
    let rows = vec![
        post("A", "neutral", None),
        post("B", "positive", None),
        post("A", "negative", None),
    ];
    let topics = aggregate(&rows);
    let a = topics.iter().find(|t| t.text == "A").unwrap();
    assert_eq!(a.sentiment, "neutral");
}

#[test]
fn mode_of_nothing_is_none() {
    assert_eq!(sentiment_mode(Vec::<&str>::new()), None);
}

#[test]
fn empty_record_set_gives_no_topics() {
    let rows: Vec<Record> = vec![];
    assert!(aggregate(&rows).is_empty());
}

// ============================================================
// aggregate: link policies
// ============================================================

#[test]
fn tiered_link_prefers_higher_tier_over_row_order() {
    let rows = vec![
        article("Berita", "neutral", Tier::Tier3, "url3"),
        article("Berita", "neutral", Tier::Tier2, "url2"),
    ];
    let topics = aggregate(&rows);
    assert_eq!(topics[0].link, "url2");
}

#[test]
fn tiered_link_first_row_within_winning_tier() {
    let rows = vec![
        article("Berita", "neutral", Tier::Unknown, "u-unknown"),
        article("Berita", "neutral", Tier::Tier1, "u1-first"),
        article("Berita", "neutral", Tier::Tier1, "u1-second"),
    ];
    assert_eq!(aggregate(&rows)[0].link, "u1-first");
}

#[test]
fn tiered_link_unknown_beats_empty() {
    let rows = vec![
        article("Berita", "neutral", Tier::Empty, "u-empty"),
        article("Berita", "neutral", Tier::Unknown, "u-unknown"),
    ];
    assert_eq!(aggregate(&rows)[0].link, "u-unknown");
}

#[test]
fn untiered_link_skips_missing_urls() {
    let rows = vec![post("A", "", None), post("A", "", Some("http://x"))];
    assert_eq!(aggregate(&rows)[0].link, "http://x");
}

#[test]
fn untiered_link_missing_when_none_present() {
    let rows = vec![post("A", "", None), post("A", "", Some(""))];
    assert_eq!(aggregate(&rows)[0].link, MISSING);
}

// ============================================================
// tokenize_and_rank
// ============================================================

#[test]
fn short_tokens_and_stopwords_never_appear() {
    let stop = StopwordSet::from_words(["yang", "dan"]);
    let corpus = [
        "Di pasar yang ramai, harga cabai dan bawang naik",
        "Yang penting harga stabil di pasar",
    ];
    let ranked = tokenize_and_rank(&corpus, &stop, DEFAULT_LIMIT);
    for entry in &ranked {
        assert!(entry.word.chars().count() >= 3, "{} too short", entry.word);
        assert!(!stop.contains(&entry.word), "{} is a stopword", entry.word);
        assert_eq!(entry.word, entry.word.to_lowercase());
    }
    assert_eq!(ranked[0].word, "pasar");
    assert_eq!(ranked[0].count, 2);
}

#[test]
fn output_sorted_non_increasing_and_capped() {
    let corpus: Vec<String> = (0..700)
        .map(|i| format!("kata{i} umum umum{}", if i % 2 == 0 { " genap" } else { "" }))
        .collect();
    let ranked = tokenize_and_rank(&corpus, &StopwordSet::default(), DEFAULT_LIMIT);
    assert_eq!(ranked.len(), DEFAULT_LIMIT);
    assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(ranked[0].word, "umum");
    assert_eq!(ranked[0].count, 1400);
    assert_eq!(ranked[1].word, "genap");
}

#[test]
fn digits_and_underscores_are_word_characters() {
    let ranked = tokenize_and_rank(&["covid_19 2024 2024"], &StopwordSet::default(), 10);
    assert_eq!(ranked[0].word, "2024");
    assert_eq!(ranked[1].word, "covid_19");
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn aggregate_and_rank_are_idempotent() {
    let rows = vec![
        post("x", "positive", Some("a")),
        post("y", "negative", None),
        post("x", "negative", Some("b")),
        post("z", "neutral", None),
        post("y", "negative", Some("c")),
    ];
    assert_eq!(aggregate(&rows), aggregate(&rows));

    let corpus: Vec<&str> = rows.iter().map(|r| r.content.as_str()).collect();
    let corpus = [corpus.join(" "), "lorem ipsum dolor sit amet lorem".to_string()];
    let stop = StopwordSet::default();
    assert_eq!(
        tokenize_and_rank(&corpus, &stop, DEFAULT_LIMIT),
        tokenize_and_rank(&corpus, &stop, DEFAULT_LIMIT)
    );
}
