//! Conversation turn models.
//!
//! A [`Turn`] is one message in a conversation — user or assistant — with the
//! instant it occurred. Turns are created once and never mutated; the memory
//! window copies them in by value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub text: String,
    /// When the message was created.
    pub occurred_at: DateTime<Utc>,
}

impl Turn {
    /// Create a turn stamped with the current instant.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            occurred_at: Utc::now(),
        }
    }

    /// Convenience constructor for a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Convenience constructor for an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}
