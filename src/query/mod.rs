// Keyword query language: parsing and evaluation.

pub mod matcher;
pub mod parser;

pub use matcher::{matches, QueryMatcher};
pub use parser::{parse, Query};
