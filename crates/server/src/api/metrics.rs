//! Prometheus metrics recording.

use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records one index query. `kind` is `recommendation` or `chat`.
pub fn record_query(kind: &str, matched: bool) {
    counter!(
        "cdss_queries_total",
        "kind" => kind.to_string(),
        "matched" => matched.to_string()
    )
    .increment(1);
}

/// Sets the `cdss_index_passages` gauge (0 when no index is loaded).
pub fn set_index_passages(count: usize) {
    gauge!("cdss_index_passages").set(count as f64);
}
