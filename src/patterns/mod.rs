//! Opening-pattern selection — the engine's only randomized step.
//!
//! Candidates are appended to a pool in a fixed order (greeting, question,
//! help-seeking, per-topic, then the catalog's fallbacks, which always fire),
//! and one is drawn uniformly from the front `selection_window` entries.
//! The RNG is owned here and seedable, so tests can pin the draw.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

use crate::config::EngineConfig;
use crate::topics::Topic;
use crate::utilities::errors::EngineError;

/// Prefix greetings. Unanchored at the right edge, so "highway robbery!"
/// greets too.
static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(hi|hello|hey|good morning|good afternoon|good evening)").unwrap()
});

/// Help-seeking vocabulary, matched anywhere in the input.
static HELP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(help|problem|issue|challenge|stuck|difficult)").unwrap());

/// Picks an opening fragment for a response.
pub struct PatternSelector {
    rng: StdRng,
}

impl PatternSelector {
    /// Selector with an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Selector with a fixed seed. Same seed, same catalog, same inputs —
    /// same draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build the candidate pool for `text` and draw one opening from it.
    pub fn select(
        &mut self,
        text: &str,
        topics: &[Topic],
        config: &EngineConfig,
    ) -> Result<String, EngineError> {
        let pool = build_pool(text, topics, config);
        let bound = config.selection_window.min(pool.len());
        if bound == 0 {
            return Err(EngineError::EmptyPatternPool);
        }
        let index = self.rng.gen_range(0..bound);
        log::debug!(
            "pattern draw: {} candidates, window {}, picked #{}",
            pool.len(),
            bound,
            index
        );
        Ok(pool[index].to_string())
    }
}

impl Default for PatternSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble candidates in rule order. Fallback openers are appended
/// unconditionally, so with a well-formed catalog the pool is never empty.
fn build_pool<'a>(text: &str, topics: &[Topic], config: &'a EngineConfig) -> Vec<&'a str> {
    let mut pool: Vec<&str> = Vec::new();

    if GREETING_PATTERN.is_match(text) {
        pool.extend(config.greeting_openers.iter().map(String::as_str));
    }
    if text.contains('?') {
        pool.extend(config.question_openers.iter().map(String::as_str));
    }
    if HELP_PATTERN.is_match(text) {
        pool.extend(config.help_openers.iter().map(String::as_str));
    }
    for entry in &config.topic_openers {
        if topics.contains(&entry.topic) {
            pool.extend(entry.openers.iter().map(String::as_str));
        }
    }
    pool.extend(config.fallback_openers.iter().map(String::as_str));

    pool
}
