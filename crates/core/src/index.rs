//! Guideline index: passages plus their TF-IDF vectors.
//!
//! The index is built once from a document and never mutated afterwards, so a
//! single instance can be shared behind an `Arc` and queried from any number of
//! threads without locking.

use crate::passage::{split_passages, Passage};
use crate::tfidf::{SparseVector, TfidfVectorizer};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a [`GuidelineIndex`].
#[derive(Debug, Error)]
pub enum IndexError {
    /// The guideline file does not exist.
    #[error("guidelines file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read guidelines file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No non-empty passage survived splitting.
    #[error("no guideline sections found in the document")]
    Empty,
}

/// Best passage for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Full text of the winning passage; empty for an empty query.
    pub passage: String,
    /// Cosine similarity in `[0, 1]`.
    pub score: f32,
    /// Ordinal of the winning passage; `None` for an empty query.
    pub ordinal: Option<usize>,
}

impl MatchResult {
    fn none() -> Self {
        Self {
            passage: String::new(),
            score: 0.0,
            ordinal: None,
        }
    }

    /// Returns `true` when some query term actually matched the passage.
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// Searchable set of passages from a single guideline document.
#[derive(Debug)]
pub struct GuidelineIndex {
    passages: Vec<Passage>,
    vectors: Vec<SparseVector>,
    vectorizer: TfidfVectorizer,
    source: Option<PathBuf>,
}

impl GuidelineIndex {
    /// Read the document at `path` and build the index.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IndexError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut index = Self::from_text(&text)?;
        index.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            passages = index.len(),
            vocabulary = index.vocabulary_len(),
            "Guideline index built"
        );
        Ok(index)
    }

    /// Build the index from in-memory document text.
    pub fn from_text(text: &str) -> Result<Self, IndexError> {
        let sections = split_passages(text);
        if sections.is_empty() {
            return Err(IndexError::Empty);
        }
        let (vectorizer, vectors) = TfidfVectorizer::fit(&sections);
        let passages = sections
            .into_iter()
            .enumerate()
            .map(|(ordinal, text)| Passage { ordinal, text })
            .collect();
        Ok(Self {
            passages,
            vectors,
            vectorizer,
            source: None,
        })
    }

    /// Return the passage with the highest cosine similarity to `query`.
    ///
    /// An empty query returns an empty passage with score 0.0. Otherwise the
    /// strictly highest score wins and ties go to the lowest ordinal, so a query
    /// with no vocabulary overlap returns passage 0 with score 0.0.
    pub fn query(&self, query: &str) -> MatchResult {
        if query.is_empty() {
            return MatchResult::none();
        }
        let query_vec = self.vectorizer.transform(query);

        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (ordinal, vector) in self.vectors.iter().enumerate() {
            let score = vector.dot(&query_vec);
            if score > best_score {
                best = ordinal;
                best_score = score;
            }
        }

        let score = best_score.clamp(0.0, 1.0);
        tracing::debug!(
            terms = query_vec.len(),
            ordinal = best,
            score,
            "Guideline query scored"
        );
        MatchResult {
            passage: self.passages[best].text.clone(),
            score,
            ordinal: Some(best),
        }
    }

    /// Number of passages.
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// Always `false` for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Passages in document order.
    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn passage(&self, ordinal: usize) -> Option<&Passage> {
        self.passages.get(ordinal)
    }

    /// Number of distinct terms known to the index.
    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }

    /// File the index was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
