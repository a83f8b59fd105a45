//! Engine configuration — catalog variants as data, not code paths.
//!
//! Everything the two built-in catalogs disagree on lives in one
//! [`EngineConfig`] value: the topic table, the pattern tables, the window
//! and selection sizes, and whether session reporting exists at all. The
//! engine is constructed over a config and never branches on which catalog
//! it was given.
//!
//! Built-ins: [`EngineConfig::business`] (the richer, business-oriented
//! catalog) and [`EngineConfig::casual`] (the lighter general-purpose one).
//! [`EngineConfig::from_json_file`] loads a custom catalog from disk.

pub mod business;
pub mod casual;

use serde::{Deserialize, Serialize};

use crate::persona::{PersonaKey, PersonalityProfile};
use crate::topics::{Topic, TopicRule};
use crate::utilities::errors::EngineError;

/// Opening fragments contributed by one topic tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicOpeners {
    pub topic: Topic,
    pub openers: Vec<String>,
}

/// One topic's insight sentence. The composer walks these in order and keeps
/// only the first whose topic was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightLine {
    pub topic: Topic,
    pub line: String,
}

/// A full response catalog plus engine tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Catalog name, for logs and diagnostics only.
    pub variant_name: String,
    /// Window capacity N for conversation memory.
    pub history_window: usize,
    /// The random draw picks from at most this many pool entries, counted
    /// from the front. Both built-in catalogs use 3.
    pub selection_window: usize,
    /// Whether `/stats` and session analytics exist in this catalog.
    pub stats_enabled: bool,
    /// Personality used until the caller switches, and fallen back to when a
    /// requested key is unknown.
    pub default_persona: PersonaKey,

    /// Personality profiles in listing order.
    pub personas: Vec<PersonalityProfile>,
    /// The topic classifier table.
    pub topic_rules: Vec<TopicRule>,

    // Pattern selector tables.
    pub greeting_openers: Vec<String>,
    pub question_openers: Vec<String>,
    pub help_openers: Vec<String>,
    pub topic_openers: Vec<TopicOpeners>,
    /// Appended to the pool on every turn, so the pool is never empty.
    pub fallback_openers: Vec<String>,

    // Composer tables.
    pub analytical_block: String,
    pub creative_block: String,
    pub insight_lines: Vec<InsightLine>,
    pub continuity_clause: String,
    pub closing_line: String,

    // Command and recovery surfaces.
    pub apology_line: String,
    /// Switch confirmation template; `{tone}` is interpolated.
    pub switch_prompt: String,
    pub help_title: String,
    pub capability_lines: Vec<String>,
    pub help_outro: String,
    pub stats_footer: String,
}

impl EngineConfig {
    /// Load a catalog from a JSON file.
    ///
    /// Mirrors the built-in catalogs' shape; any field may be customized.
    pub fn from_json_file(path: &str) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::CatalogFile {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| EngineError::CatalogFile {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::business()
    }
}

/// Build an owned string list from literals. Catalog-construction helper.
pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
