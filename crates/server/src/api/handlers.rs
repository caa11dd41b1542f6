//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cdss_core::config;
use cdss_core::explain::explain;
use cdss_core::GuidelineIndex;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Guideline index built at startup; `None` when the server runs degraded.
    pub index: Option<Arc<GuidelineIndex>>,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

impl AppState {
    fn index(&self) -> Result<&GuidelineIndex, ApiError> {
        self.index.as_deref().ok_or_else(|| {
            ApiError::ServiceUnavailable("Guideline index is not loaded".to_string())
        })
    }
}

fn validate_profile(profile: &PatientProfile) -> Result<(), ApiError> {
    let id_len = profile.patient_id.trim().chars().count();
    if id_len == 0 || id_len > config::MAX_PATIENT_ID_LEN {
        return Err(ApiError::BadRequest(format!(
            "patient_id must be 1-{} characters",
            config::MAX_PATIENT_ID_LEN
        )));
    }
    if profile.age > config::MAX_AGE {
        return Err(ApiError::BadRequest(format!(
            "age must be 0-{}",
            config::MAX_AGE
        )));
    }
    let gender_len = profile.gender.trim().chars().count();
    if gender_len == 0 || gender_len > config::MAX_GENDER_LEN {
        return Err(ApiError::BadRequest(format!(
            "gender must be 1-{} characters",
            config::MAX_GENDER_LEN
        )));
    }
    if profile.symptoms.is_empty() || profile.symptoms.len() > config::MAX_SYMPTOMS {
        return Err(ApiError::BadRequest(format!(
            "symptoms must contain 1-{} entries",
            config::MAX_SYMPTOMS
        )));
    }
    if profile
        .symptoms
        .iter()
        .any(|s| s.chars().count() > config::MAX_SYMPTOM_LEN)
    {
        return Err(ApiError::BadRequest(format!(
            "each symptom must be at most {} characters",
            config::MAX_SYMPTOM_LEN
        )));
    }
    if profile.symptoms.iter().all(|s| s.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "at least one symptom must be non-blank".into(),
        ));
    }
    Ok(())
}

fn validate_query(query: &str) -> Result<(), ApiError> {
    if query.chars().count() > config::MAX_QUERY_LEN {
        return Err(ApiError::BadRequest(format!(
            "query must be at most {} characters",
            config::MAX_QUERY_LEN
        )));
    }
    Ok(())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (passages, vocabulary) = state
        .index
        .as_deref()
        .map(|idx| (idx.len(), idx.vocabulary_len()))
        .unwrap_or((0, 0));
    let loaded = state.index.is_some();

    let status_code = if loaded {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if loaded { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
            index_loaded: loaded,
            passages,
            vocabulary,
        }),
    )
}

/// `POST /recommendation`
pub async fn recommendation(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let Json(req) = payload?;
    validate_profile(&req)?;
    let index = state.index()?;

    let query = req.symptom_query();
    let result = index.query(&query);
    let explanation = explain(&req, &query, &result);
    metrics::record_query("recommendation", result.is_match());

    tracing::info!(
        patient_id = %req.patient_id,
        symptoms = req.symptoms.len(),
        ordinal = ?result.ordinal,
        score = result.score,
        "Recommendation served"
    );

    Ok(Json(RecommendationResponse {
        patient_id: req.patient_id,
        query,
        snippet: result.passage,
        explanation,
    }))
}

/// `POST /chat`
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    validate_query(&req.query)?;
    let index = state.index()?;

    let result = index.query(&req.query);
    metrics::record_query("chat", result.is_match());
    tracing::info!(
        query_len = req.query.len(),
        ordinal = ?result.ordinal,
        score = result.score,
        "Chat answered"
    );

    Ok(Json(ChatResponse {
        answer: result.passage,
    }))
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PatientProfile {
        PatientProfile {
            patient_id: "p1".into(),
            age: 67,
            gender: "Female".into(),
            symptoms: vec!["shortness of breath".into(), "swelling".into()],
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(validate_profile(&profile()).is_ok());
    }

    #[test]
    fn test_profile_limits() {
        let mut p = profile();
        p.patient_id = "  ".into();
        assert!(matches!(validate_profile(&p), Err(ApiError::BadRequest(_))));

        let mut p = profile();
        p.age = config::MAX_AGE + 1;
        assert!(matches!(validate_profile(&p), Err(ApiError::BadRequest(_))));

        let mut p = profile();
        p.gender = String::new();
        assert!(matches!(validate_profile(&p), Err(ApiError::BadRequest(_))));

        let mut p = profile();
        p.symptoms.clear();
        assert!(matches!(validate_profile(&p), Err(ApiError::BadRequest(_))));

        let mut p = profile();
        p.symptoms = vec![" ".into(), "".into()];
        assert!(matches!(validate_profile(&p), Err(ApiError::BadRequest(_))));

        let mut p = profile();
        p.symptoms = vec!["x".repeat(config::MAX_SYMPTOM_LEN + 1)];
        assert!(matches!(validate_profile(&p), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_query_limit() {
        assert!(validate_query("").is_ok());
        assert!(validate_query(&"q".repeat(config::MAX_QUERY_LEN)).is_ok());
        assert!(validate_query(&"q".repeat(config::MAX_QUERY_LEN + 1)).is_err());
    }
}
