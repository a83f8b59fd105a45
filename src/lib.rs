//! # Parlance
//!
//! A rule-based conversational response engine. Given a user utterance and
//! the caller's message history, it classifies topics with a keyword table,
//! draws an opening pattern, and composes a structured markdown reply,
//! modulated by a switchable personality profile.
//!
//! Topic detection is a deliberate deterministic heuristic and the reply
//! text comes from finite catalog tables — there is no language model here.
//! The contract is structural: which branch fires under which condition,
//! what the reply is built from, and how session memory evolves.
//!
//! Each chat session owns one [`ConversationEngine`] value; sessions share
//! nothing but the immutable catalogs. See [`EngineConfig::business`] and
//! [`EngineConfig::casual`] for the two built-in catalogs.

pub mod commands;
pub mod composer;
pub mod config;
pub mod engine;
pub mod memory;
pub mod patterns;
pub mod persona;
pub mod topics;
pub mod types;
pub mod utilities;

pub use config::EngineConfig;
pub use engine::latency::{FixedLatency, NoLatency, ResponseLatency};
pub use engine::ConversationEngine;
pub use memory::ConversationMemory;
pub use patterns::PatternSelector;
pub use persona::{PersonaKey, PersonaRegistry, PersonalityProfile, Tone};
pub use topics::Topic;
pub use types::{Role, SessionAnalytics, Turn};
pub use utilities::errors::EngineError;

/// Library version.
pub const VERSION: &str = "0.1.0";
