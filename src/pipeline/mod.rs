// Pipeline stages: filtering, statistics, and the end-to-end summary.

pub mod filter;
pub mod stats;
pub mod summarize;
