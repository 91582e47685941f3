//! In-memory chat-builder session state.
//!
//! One `BuilderSession` holds the message transcript and the single live
//! `AgentConfiguration` for one user session. Nothing is persisted; the
//! session dies with its owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AgentConfiguration, Message};

/// Opening assistant message seeded into every new session.
pub const GREETING: &str = "Hi! I'm your AI Agent Builder. Tell me what trading strategy \
                            you'd like to implement. For example: \"Create a delta-neutral \
                            strategy that trades ETH/USDC on Uniswap with low risk\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::AwaitingResponse => write!(f, "awaiting_response"),
        }
    }
}

/// Transcript plus live configuration for one builder session.
///
/// The transcript is append-only and insertion order is display order. The
/// only removal ever performed is the placeholder swap in
/// [`resolve_placeholder`](Self::resolve_placeholder); at most one
/// placeholder exists at a time and it is always the last entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    messages: Vec<Message>,
    configuration: AgentConfiguration,
    state: SessionState,
    next_message_id: u64,
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderSession {
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            messages: Vec::new(),
            configuration: AgentConfiguration::unconfigured(),
            state: SessionState::Idle,
            next_message_id: 0,
        };
        let id = session.take_message_id();
        session.messages.push(Message::assistant(id, GREETING));
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state == SessionState::AwaitingResponse
    }

    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    pub fn configuration(&self) -> &AgentConfiguration {
        &self.configuration
    }

    pub fn placeholder_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_placeholder).count()
    }

    /// Append the user's message and the typing placeholder, entering
    /// `AwaitingResponse`. Callers must have checked the state first.
    pub(crate) fn begin_exchange(&mut self, text: &str) {
        debug_assert_eq!(self.state, SessionState::Idle);
        debug_assert_eq!(self.placeholder_count(), 0);

        let user_id = self.take_message_id();
        self.messages.push(Message::user(user_id, text));

        let placeholder_id = self.take_message_id();
        self.messages.push(Message::placeholder(placeholder_id));

        self.state = SessionState::AwaitingResponse;
    }

    /// Remove the placeholder, append the final assistant message, and
    /// return to `Idle`. The final message is a fresh entry; it shares no
    /// identity with the placeholder it replaces.
    pub(crate) fn resolve_placeholder(&mut self, response_text: &str) {
        debug_assert_eq!(self.state, SessionState::AwaitingResponse);

        self.messages.retain(|m| !m.is_placeholder);

        let id = self.take_message_id();
        self.messages.push(Message::assistant(id, response_text));

        self.state = SessionState::Idle;
    }

    /// Atomically swap the whole configuration. Partial updates are not
    /// supported; every classification determines all fields together.
    pub(crate) fn replace_configuration(&mut self, configuration: AgentConfiguration) {
        self.configuration = configuration;
    }

    fn take_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}
