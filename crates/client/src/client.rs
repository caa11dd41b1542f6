//! Blocking HTTP client for the recommendation and chat endpoints.
//!
//! Every call is synchronous with a bounded timeout. Failures are returned to
//! the caller as [`ClientError`]; nothing is retried.

use cdss_core::schema::{ChatRequest, ChatResponse, RecommendationRequest, RecommendationResponse};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by [`GuidelineClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("could not reach backend: {0}")]
    Connect(String),
    #[error("backend returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("invalid response from backend: {0}")]
    Decode(String),
}

/// The two calls the interactive client makes.
pub trait GuidelineApi {
    fn recommend(&self, req: &RecommendationRequest) -> Result<RecommendationResponse, ClientError>;
    fn chat(&self, query: &str) -> Result<String, ClientError>;
}

/// reqwest-backed implementation of [`GuidelineApi`].
pub struct GuidelineClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl GuidelineClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Connect(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "POST");
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or(text);
            return Err(ClientError::Status {
                code: status.as_u16(),
                message,
            });
        }
        resp.json::<T>().map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout)
            } else {
                ClientError::Decode(e.to_string())
            }
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Connect(e.to_string())
        }
    }
}

impl GuidelineApi for GuidelineClient {
    fn recommend(&self, req: &RecommendationRequest) -> Result<RecommendationResponse, ClientError> {
        self.post("/recommendation", req)
    }

    fn chat(&self, query: &str) -> Result<String, ClientError> {
        let resp: ChatResponse = self.post(
            "/chat",
            &ChatRequest {
                query: query.to_string(),
            },
        )?;
        Ok(resp.answer)
    }
}
