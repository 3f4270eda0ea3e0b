//! Text statistics for plain-text files: tokenized words, counts, vocabulary,
//! frequencies, the most common word, document similarity and CSV export.

pub mod config;
pub mod document;
pub mod report;
pub mod similarity;
pub mod stats;
pub mod tokenizer;

pub use document::Document;
pub use report::{
    read_sample_csv, write_analysis_details, write_analysis_details_from, AnalysisRow,
};
pub use stats::{Summary, TextStats};
