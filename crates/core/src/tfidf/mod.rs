//! TF-IDF weighting for guideline passages.
//!
//! Passages are tokenized, counted, and weighted by smoothed inverse document
//! frequency over a vocabulary that is frozen once the vectorizer is fitted.
//! All vectors are L2-normalised, so a dot product is a cosine similarity.

/// Sparse `(term id, weight)` vectors with dot product and normalisation.
pub mod sparse;
/// Lowercasing word tokenizer with English stop word removal.
pub mod tokenizer;
/// Vocabulary, IDF weights, and passage/query vectorisation.
pub mod vectorizer;

pub use sparse::SparseVector;
pub use tokenizer::{tokenize, Tokens};
pub use vectorizer::TfidfVectorizer;
