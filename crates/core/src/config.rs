//! Global configuration constants for the guideline retrieval service.
//!
//! All validation limits, timeouts, and server/client defaults are defined here.
//! These are compile-time constants; runtime configuration is handled via CLI arguments
//! and environment variables in the `cdss-server` and `cdss` binaries.

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default guideline document, relative to the working directory.
pub const DEFAULT_GUIDELINES_PATH: &str = "data/guidelines/hf_guideline.txt";

/// Default backend URL used by the interactive client.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Separator placed between symptoms when building a recommendation query.
pub const SYMPTOM_SEPARATOR: &str = ", ";

/// Maximum length of a patient identifier in characters.
pub const MAX_PATIENT_ID_LEN: usize = 128;

/// Maximum accepted patient age in years.
pub const MAX_AGE: u32 = 150;

/// Maximum length of the gender field in characters.
pub const MAX_GENDER_LEN: usize = 32;

/// Maximum number of symptoms per recommendation request.
pub const MAX_SYMPTOMS: usize = 64;

/// Maximum length of a single symptom in characters.
pub const MAX_SYMPTOM_LEN: usize = 256;

/// Maximum length of a chat query in characters.
pub const MAX_QUERY_LEN: usize = 4096;

/// Per-request timeout on the server, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client-side timeout for a single call to the backend, in seconds.
pub const CLIENT_TIMEOUT_SECS: u64 = 20;

/// Maximum HTTP request body size in bytes (64 KB).
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Number of messages kept in a client transcript before the oldest are evicted.
pub const TRANSCRIPT_CAPACITY: usize = 200;
