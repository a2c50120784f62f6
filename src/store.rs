//! Conversation log and the single in-flight request slot.
//!
//! The store never performs I/O. `submit` hands back the request to dispatch and
//! the caller reports the outcome through `on_success`, `on_failure` or `resolve`.

use crate::ai::{CompletionRequest, build_request};
use crate::error::{ChatError, ChatResult};
use crate::params::ParameterSnapshot;
use crate::types::{Message, MessageId, Origin};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Awaiting,
}

#[derive(Clone, Debug, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    state: RequestState,
    sequence: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == RequestState::Awaiting
    }

    /// Would `submit` accept this text right now?
    pub fn accepts(&self, text: &str) -> bool {
        !self.is_pending() && !text.trim().is_empty()
    }

    /// Append the user message and move to `Awaiting`, returning the request the
    /// caller must dispatch. Blank text, or a request already in flight, is a no-op.
    pub fn submit(&mut self, text: &str, snapshot: &ParameterSnapshot) -> Option<CompletionRequest> {
        if !self.accepts(text) {
            return None;
        }

        let id = self.append(text.to_string(), Origin::User, None);
        self.state = RequestState::Awaiting;
        tracing::info!(
            %id,
            temperature = snapshot.temperature,
            top_k = ?snapshot.top_k,
            top_p = ?snapshot.top_p,
            reasoning_effort = %snapshot.reasoning_effort,
            "dispatching completion request"
        );
        Some(build_request(text, snapshot))
    }

    pub fn on_success(&mut self, reply: String) -> ChatResult<()> {
        self.ensure_awaiting()?;
        self.append(reply, Origin::Assistant, Some("bot"));
        self.state = RequestState::Idle;
        tracing::info!("completion received");
        Ok(())
    }

    pub fn on_failure(&mut self, description: &str) -> ChatResult<()> {
        self.ensure_awaiting()?;
        self.append(error_marker(description), Origin::Assistant, Some("error"));
        self.state = RequestState::Idle;
        tracing::warn!(error = description, "completion failed");
        Ok(())
    }

    /// Record whatever the dispatched request came back with.
    pub fn resolve(&mut self, outcome: ChatResult<String>) -> ChatResult<()> {
        match outcome {
            Ok(reply) => self.on_success(reply),
            Err(err) => self.on_failure(&err.to_string()),
        }
    }

    fn ensure_awaiting(&self) -> ChatResult<()> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(ChatError::NoRequestInFlight)
        }
    }

    fn append(&mut self, content: String, origin: Origin, tag: Option<&str>) -> MessageId {
        let now = OffsetDateTime::now_utc();
        self.sequence += 1;
        let id = MessageId::generate(now, self.sequence, tag);
        self.messages.push(Message::new(id.clone(), content, origin, now));
        id
    }
}

fn error_marker(description: &str) -> String {
    format!("❌ Error: {description}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn params() -> ParameterSnapshot {
        ParameterSnapshot::default()
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut store = ConversationStore::new();
        for text in ["", "   ", "\n\t "] {
            assert!(store.submit(text, &params()).is_none());
            assert!(store.is_empty());
            assert_eq!(store.state(), RequestState::Idle);
        }
    }

    #[test]
    fn test_submit_appends_user_first() {
        let mut store = ConversationStore::new();
        let request = store.submit("hello", &params()).expect("accepted");
        assert_eq!(request.input, "hello");
        assert_eq!(store.len(), 1);
        assert!(store.messages()[0].is_user());
        assert!(store.is_pending());
    }

    #[test]
    fn test_success_round() {
        let mut store = ConversationStore::new();
        store.submit("hello", &params());
        store.on_success("hi there".to_string()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].origin(), Origin::User);
        assert_eq!(store.messages()[1].origin(), Origin::Assistant);
        assert_eq!(store.messages()[1].content(), "hi there");
        assert!(store.messages()[1].id().as_str().ends_with("-bot"));
        assert!(!store.is_pending());
    }

    #[test]
    fn test_failure_round() {
        let mut store = ConversationStore::new();
        store.submit("hello", &params());
        store.resolve(Err(ChatError::Status(500))).unwrap();

        assert_eq!(store.len(), 2);
        let bubble = &store.messages()[1];
        assert_eq!(bubble.origin(), Origin::Assistant);
        assert_eq!(bubble.content(), "❌ Error: Failed to send message");
        assert!(bubble.id().as_str().ends_with("-error"));
        assert!(!store.is_pending());
    }

    #[test]
    fn test_submit_while_awaiting_is_noop() {
        let mut store = ConversationStore::new();
        store.submit("first", &params());
        assert!(store.submit("second", &params()).is_none());
        assert_eq!(store.len(), 1);
        assert!(store.is_pending());

        store.on_success("ok".to_string()).unwrap();
        assert!(store.submit("second", &params()).is_some());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_outcome_without_request_rejected() {
        let mut store = ConversationStore::new();
        assert_eq!(store.on_success("stray".to_string()), Err(ChatError::NoRequestInFlight));
        assert_eq!(store.on_failure("stray"), Err(ChatError::NoRequestInFlight));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_unique_across_rapid_turns() {
        let mut store = ConversationStore::new();
        for i in 0..20 {
            store.submit(&format!("message {i}"), &params());
            if i % 2 == 0 {
                store.on_success("ok".to_string()).unwrap();
            } else {
                store.on_failure("down").unwrap();
            }
        }
        let ids: HashSet<_> = store.messages().iter().map(|m| m.id().clone()).collect();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn test_user_text_kept_verbatim() {
        let mut store = ConversationStore::new();
        store.submit("  padded  ", &params());
        assert_eq!(store.messages()[0].content(), "  padded  ");
    }

    #[test]
    fn test_submit_ids_match_recorded_messages() {
        let mut store = ConversationStore::new();
        store.submit("hello", &params());
        let user_id = store.messages()[0].id().clone();
        store.on_failure("down").unwrap();
        assert!(!user_id.as_str().ends_with("-bot"));
        assert!(!user_id.as_str().ends_with("-error"));
        assert_eq!(error_marker("down"), store.messages()[1].content());
    }
}
