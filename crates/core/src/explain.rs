//! Explanation text returned alongside a recommended guideline snippet.

use crate::index::MatchResult;
use crate::schema::PatientProfile;

/// Describe why `result` was selected for `profile`. Never returns an empty string.
pub fn explain(profile: &PatientProfile, query: &str, result: &MatchResult) -> String {
    let patient = describe_patient(profile);
    let symptoms = if query.is_empty() {
        "no symptoms".to_string()
    } else {
        format!("the reported symptoms ({query})")
    };

    match result.ordinal {
        Some(ordinal) if result.is_match() => format!(
            "For {patient}, guideline section {} was selected as the closest match to {symptoms} \
             (TF-IDF cosine similarity {:.3}). Review it against the full clinical picture before acting.",
            ordinal + 1,
            result.score,
        ),
        _ => format!(
            "For {patient}, no guideline section matched {symptoms}; the text shown is not \
             specific to this presentation and clinical judgement is required."
        ),
    }
}

fn describe_patient(profile: &PatientProfile) -> String {
    let gender = profile.gender.trim();
    if gender.is_empty() {
        format!("a {}-year-old patient", profile.age)
    } else {
        format!("a {}-year-old {} patient", profile.age, gender.to_lowercase())
    }
}
