// Ringkas: topic summaries for news and social-media exports
//
// This is the library root. Each module corresponds to a stage of the
// summary: loading records, narrowing them with a keyword query, and
// collapsing what is left into ranked topics and word frequencies.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod records;
pub mod topics;
