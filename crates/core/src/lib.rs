//! # cdss-core
//!
//! Retrieval engine for clinical guideline documents. A guideline file is split
//! into blank-line-delimited passages, each passage is turned into a TF-IDF
//! vector over a vocabulary frozen at build time, and a query is answered with
//! the single passage of highest cosine similarity.
//!
//! This crate has no async dependencies; the HTTP layer lives in `cdss-server`
//! and the interactive client in `cdss-client`.

/// Global configuration constants: limits, defaults, and timeouts.
pub mod config;
/// Human-readable explanation of why a passage was recommended.
pub mod explain;
/// `GuidelineIndex`: construction from a document and top-1 query.
pub mod index;
/// Blank-line passage splitting.
pub mod passage;
/// Request and response schema shared by the server and the client.
pub mod schema;
/// TF-IDF weighting: tokenizer, sparse vectors, and the fitted vectorizer.
pub mod tfidf;

pub use index::{GuidelineIndex, IndexError, MatchResult};
pub use passage::Passage;
