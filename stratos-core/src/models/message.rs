use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageAuthor {
    User,
    Assistant,
}

impl std::fmt::Display for MessageAuthor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageAuthor::User => write!(f, "user"),
            MessageAuthor::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single transcript entry.
///
/// Messages are append-only: once pushed into a session transcript they are
/// never edited or reordered. The one exception is the typing placeholder,
/// which is removed and replaced by a fresh final message when the scheduled
/// response arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub author: MessageAuthor,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub is_placeholder: bool,
}

impl Message {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            author: MessageAuthor::User,
            text: text.into(),
            created_at: Utc::now(),
            is_placeholder: false,
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            author: MessageAuthor::Assistant,
            text: text.into(),
            created_at: Utc::now(),
            is_placeholder: false,
        }
    }

    /// Transient "assistant is typing" entry shown while a reply is pending.
    pub fn placeholder(id: u64) -> Self {
        Self {
            id,
            author: MessageAuthor::Assistant,
            text: String::new(),
            created_at: Utc::now(),
            is_placeholder: true,
        }
    }
}
