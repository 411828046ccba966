//! Keyword extraction, matching and density analysis shared by the ATS
//! analyzer, the keyword report and the quality scorer.

pub mod density;
pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod relevance;
pub mod report;
pub mod tokenizer;
pub mod vocabulary;
