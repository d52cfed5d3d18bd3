// Records: the input corpus and how it is loaded.

pub mod ingest;
pub mod models;
