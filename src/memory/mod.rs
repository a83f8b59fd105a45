//! Conversation memory — the per-session rolling context.

pub mod conversation;

pub use conversation::{ConversationMemory, RECENT_TOPIC_VIEW};
