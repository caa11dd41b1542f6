//! cdss-server: HTTP server for guideline recommendations.
//!
//! Exposes the recommendation and chat APIs over a shared, read-only
//! `GuidelineIndex`. Retrieval logic lives in `cdss-core`.

/// REST API layer: Axum router, HTTP handlers, models, errors, metrics.
pub mod api;
