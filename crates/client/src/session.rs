//! Interactive session state.
//!
//! The UI feeds discrete [`Event`]s into [`Session::handle`]. Each event makes
//! at most one backend call and one state update, and the resulting
//! [`Outcome`] is rendered by the caller. Failures never clear the transcript,
//! so the user can simply retry.

use crate::client::GuidelineApi;
use crate::transcript::{Role, Transcript};
use cdss_core::schema::{RecommendationRequest, RecommendationResponse};

/// A user action.
#[derive(Debug, Clone)]
pub enum Event {
    /// Structured form submission.
    SubmitForm(RecommendationRequest),
    /// Chat message.
    SendChat(String),
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Recommendation(RecommendationResponse),
    Answer(String),
    /// Call failed; the message is meant for display.
    Error(String),
    /// Blank chat input; nothing was sent.
    Ignored,
}

pub struct Session<A> {
    api: A,
    transcript: Transcript,
}

impl<A: GuidelineApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self::with_transcript(api, Transcript::default())
    }

    pub fn with_transcript(api: A, transcript: Transcript) -> Self {
        Self { api, transcript }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::SubmitForm(form) => match self.api.recommend(&form) {
                Ok(resp) => Outcome::Recommendation(resp),
                Err(e) => {
                    tracing::warn!("Recommendation failed: {}", e);
                    Outcome::Error(format!("Error retrieving recommendation: {e}"))
                }
            },
            Event::SendChat(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Outcome::Ignored;
                }
                self.transcript.push(Role::User, text);
                match self.api.chat(text) {
                    Ok(answer) => {
                        self.transcript.push(Role::Assistant, answer.clone());
                        Outcome::Answer(answer)
                    }
                    Err(e) => {
                        tracing::warn!("Chat failed: {}", e);
                        let message = format!("Error: {e}");
                        self.transcript.push(Role::Assistant, message.clone());
                        Outcome::Error(message)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use std::cell::Cell;
    use std::time::Duration;

    /// Answers every chat with its query reversed; fails while `down` is set.
    struct FakeApi {
        down: Cell<bool>,
        calls: Cell<usize>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                down: Cell::new(false),
                calls: Cell::new(0),
            }
        }
    }

    impl GuidelineApi for &FakeApi {
        fn recommend(
            &self,
            req: &RecommendationRequest,
        ) -> Result<RecommendationResponse, ClientError> {
            self.calls.set(self.calls.get() + 1);
            if self.down.get() {
                return Err(ClientError::Timeout(Duration::from_secs(20)));
            }
            Ok(RecommendationResponse {
                patient_id: req.patient_id.clone(),
                query: req.symptom_query(),
                snippet: "Use diuretics for volume overload.".into(),
                explanation: "matched".into(),
            })
        }

        fn chat(&self, query: &str) -> Result<String, ClientError> {
            self.calls.set(self.calls.get() + 1);
            if self.down.get() {
                return Err(ClientError::Connect("connection refused".into()));
            }
            Ok(query.chars().rev().collect())
        }
    }

    fn form() -> RecommendationRequest {
        RecommendationRequest {
            patient_id: "p1".into(),
            age: 67,
            gender: "Female".into(),
            symptoms: vec!["swelling".into()],
        }
    }

    #[test]
    fn test_chat_appends_both_messages() {
        let api = FakeApi::new();
        let mut session = Session::new(&api);
        assert_eq!(session.handle(Event::SendChat("abc".into())), Outcome::Answer("cba".into()));
        let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn test_blank_chat_ignored() {
        let api = FakeApi::new();
        let mut session = Session::new(&api);
        assert_eq!(session.handle(Event::SendChat("   ".into())), Outcome::Ignored);
        assert!(session.transcript().is_empty());
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn test_chat_failure_preserves_history() {
        let api = FakeApi::new();
        let mut session = Session::new(&api);
        session.handle(Event::SendChat("first".into()));
        api.down.set(true);
        let outcome = session.handle(Event::SendChat("second".into()));
        assert_eq!(
            outcome,
            Outcome::Error("Error: could not reach backend: connection refused".into())
        );
        assert_eq!(session.transcript().len(), 4);

        api.down.set(false);
        assert_eq!(session.handle(Event::SendChat("second".into())), Outcome::Answer("dnoces".into()));
        assert_eq!(session.transcript().len(), 6);
        assert_eq!(session.transcript().iter().next().unwrap().content, "first");
    }

    #[test]
    fn test_form_submission() {
        let api = FakeApi::new();
        let mut session = Session::new(&api);
        match session.handle(Event::SubmitForm(form())) {
            Outcome::Recommendation(resp) => {
                assert_eq!(resp.patient_id, "p1");
                assert_eq!(resp.query, "swelling");
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_form_failure_is_reported() {
        let api = FakeApi::new();
        api.down.set(true);
        let mut session = Session::new(&api);
        let outcome = session.handle(Event::SubmitForm(form()));
        assert_eq!(
            outcome,
            Outcome::Error("Error retrieving recommendation: request timed out after 20s".into())
        );
    }

    #[test]
    fn test_bounded_transcript() {
        let api = FakeApi::new();
        let mut session = Session::with_transcript(&api, Transcript::with_capacity(4));
        for i in 0..5 {
            session.handle(Event::SendChat(format!("q{i}")));
        }
        assert_eq!(session.transcript().len(), 4);
        assert_eq!(session.transcript().iter().next().unwrap().content, "q3");
    }
}
