//! TF-IDF benchmark: index build time and query throughput
//! over a synthetic guideline document.
//!
//! Usage: cargo bench --bench tfidf_query

use cdss_core::GuidelineIndex;
use std::time::Instant;

const PASSAGES: usize = 2_000;
const QUERIES: usize = 5_000;

const TERMS: &[&str] = &[
    "diuretics", "overload", "oedema", "dyspnoea", "orthopnea", "fatigue", "hypertension",
    "ejection", "fraction", "beta", "blockers", "inhibitors", "sodium", "potassium", "renal",
    "creatinine", "natriuretic", "peptide", "echocardiography", "arrhythmia", "anticoagulation",
    "digoxin", "ivabradine", "sacubitril", "valsartan", "spironolactone", "palpitations",
    "syncope", "cachexia", "congestion",
];

/// Deterministic xorshift so runs are comparable.
fn next(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

fn sentence(state: &mut u64, words: usize) -> String {
    (0..words)
        .map(|_| TERMS[(next(state) % TERMS.len() as u64) as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    let document = (0..PASSAGES)
        .map(|i| format!("Section {i}: {}.", sentence(&mut state, 40)))
        .collect::<Vec<_>>()
        .join("\n\n");
    let queries: Vec<String> = (0..QUERIES).map(|_| sentence(&mut state, 4)).collect();

    let start = Instant::now();
    let index = GuidelineIndex::from_text(&document).expect("synthetic document is non-empty");
    let build = start.elapsed();
    println!(
        "build: {} passages, {} terms in {:.2?}",
        index.len(),
        index.vocabulary_len(),
        build
    );

    let start = Instant::now();
    let mut matched = 0usize;
    for q in &queries {
        if index.query(q).is_match() {
            matched += 1;
        }
    }
    let elapsed = start.elapsed();
    println!(
        "query: {} queries in {:.2?} ({:.0} QPS), {} matched",
        QUERIES,
        elapsed,
        QUERIES as f64 / elapsed.as_secs_f64(),
        matched
    );
}
