//! Request and response schema for the recommendation and chat APIs.
//!
//! These types are the JSON contract between `cdss-server` and `cdss-client`.
//! Field-level validation happens at the server edge before the index is queried.

use crate::config;
use serde::{Deserialize, Serialize};

/// Key patient information supplied with a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient_id: String,
    pub age: u32,
    pub gender: String,
    pub symptoms: Vec<String>,
}

impl PatientProfile {
    /// Query text for the index: trimmed, non-blank symptoms joined with `", "`.
    pub fn symptom_query(&self) -> String {
        self.symptoms
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(config::SYMPTOM_SEPARATOR)
    }
}

/// Request body for `POST /recommendation`.
pub type RecommendationRequest = PatientProfile;

/// Response body for `POST /recommendation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub patient_id: String,
    pub query: String,
    pub snippet: String,
    pub explanation: String,
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(symptoms: &[&str]) -> PatientProfile {
        PatientProfile {
            patient_id: "p1".into(),
            age: 67,
            gender: "Female".into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_symptom_query_joins_with_commas() {
        let p = profile(&["shortness of breath", "swelling"]);
        assert_eq!(p.symptom_query(), "shortness of breath, swelling");
    }

    #[test]
    fn test_symptom_query_skips_blank_entries() {
        let p = profile(&["  fatigue ", "", "   ", "orthopnea"]);
        assert_eq!(p.symptom_query(), "fatigue, orthopnea");
    }

    #[test]
    fn test_profile_json_shape() {
        let json = serde_json::json!({
            "patient_id": "p1",
            "age": 67,
            "gender": "Female",
            "symptoms": ["shortness of breath", "swelling"]
        });
        let p: PatientProfile = serde_json::from_value(json).unwrap();
        assert_eq!(p, profile(&["shortness of breath", "swelling"]));
    }

    #[test]
    fn test_negative_age_rejected_by_schema() {
        let json = serde_json::json!({
            "patient_id": "p1",
            "age": -3,
            "gender": "Female",
            "symptoms": []
        });
        assert!(serde_json::from_value::<PatientProfile>(json).is_err());
    }
}
