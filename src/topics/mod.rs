// Topic summarization: aggregation into topic rows, word frequencies,
// stopwords, and display highlighting.

pub mod aggregate;
pub mod frequency;
pub mod highlight;
pub mod stopwords;
pub mod traits;
