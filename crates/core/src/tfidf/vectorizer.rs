//! Fitted TF-IDF vectorizer.
//!
//! `fit` derives the vocabulary and smoothed IDF weights from the passages:
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! where `n` is the passage count and `df(t)` the number of passages containing
//! `t`. A term present in every passage still gets weight 1.0. Term ids follow
//! lexicographic term order so the vocabulary is reproducible across builds.

use crate::tfidf::sparse::SparseVector;
use crate::tfidf::tokenizer::tokenize;
use std::collections::{BTreeMap, HashMap};

/// Vocabulary and IDF weights, frozen after [`TfidfVectorizer::fit`].
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Fit on `passages` and return the vectorizer plus one L2-normalised vector per passage.
    pub fn fit<S: AsRef<str>>(passages: &[S]) -> (Self, Vec<SparseVector>) {
        let n = passages.len() as f32;

        let mut doc_freq: BTreeMap<String, u32> = BTreeMap::new();
        let mut counts: Vec<HashMap<String, u32>> = Vec::with_capacity(passages.len());
        for passage in passages {
            let tokens = tokenize(passage.as_ref());
            let mut tf: HashMap<String, u32> = HashMap::with_capacity(tokens.len());
            for token in tokens.iter() {
                *tf.entry(token.to_string()).or_insert(0) += 1;
            }
            for term in tf.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            counts.push(tf);
        }

        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (id, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
            vocabulary.insert(term, id as u32);
        }

        let vectorizer = Self { vocabulary, idf };
        let vectors = counts
            .into_iter()
            .map(|tf| {
                vectorizer.weigh(
                    tf.into_iter()
                        .filter_map(|(term, count)| vectorizer.term_id(&term).map(|id| (id, count))),
                )
            })
            .collect();
        (vectorizer, vectors)
    }

    /// Vectorise `text` in the frozen vocabulary. Unknown terms contribute nothing.
    pub fn transform(&self, text: &str) -> SparseVector {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SparseVector::empty();
        }
        let mut tf: HashMap<u32, u32> = HashMap::with_capacity(tokens.len());
        for token in tokens.iter() {
            if let Some(id) = self.term_id(token) {
                *tf.entry(id).or_insert(0) += 1;
            }
        }
        self.weigh(tf.into_iter())
    }

    /// Id of `term` in the vocabulary.
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    /// Number of distinct terms in the vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    fn weigh(&self, counts: impl Iterator<Item = (u32, u32)>) -> SparseVector {
        let pairs = counts
            .map(|(id, count)| (id, count as f32 * self.idf[id as usize]))
            .collect();
        let mut v = SparseVector::from_pairs(pairs);
        v.normalize();
        v
    }
}
