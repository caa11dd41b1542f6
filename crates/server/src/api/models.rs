//! Request and response data transfer objects for the REST API.
//!
//! The recommendation and chat payloads are shared with the client through
//! `cdss_core::schema`; this module adds the server-only types.

use serde::Serialize;

pub use cdss_core::schema::{
    ChatRequest, ChatResponse, PatientProfile, RecommendationRequest, RecommendationResponse,
};

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub index_loaded: bool,
    pub passages: usize,
    pub vocabulary: usize,
}
