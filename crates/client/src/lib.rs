//! cdss-client: client for the guideline recommendation API.
//!
//! A blocking HTTP client with a bounded timeout, a client-local chat
//! transcript, and an explicit event loop ([`Session`]) that turns discrete
//! user actions into one call and one state update each.

/// Blocking HTTP client and the `GuidelineApi` seam.
pub mod client;
/// Interactive session driven by explicit events.
pub mod session;
/// Bounded, ordered chat transcript.
pub mod transcript;

pub use client::{ClientError, GuidelineApi, GuidelineClient};
pub use session::{Event, Outcome, Session};
pub use transcript::{Message, Role, Transcript};
