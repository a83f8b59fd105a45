//! Engine facade — per-session orchestration of the response pipeline.
//!
//! The pipeline per turn:
//!
//! ```text
//! User text + full history
//!   → await simulated latency (no state touched yet)
//!   → refresh the conversation window from history
//!   → reserved command? short-circuit with its document
//!   → classify topics → accumulate into session memory
//!   → draw an opening pattern
//!   → compose the structured reply
//! ```
//!
//! A [`ConversationEngine`] is an owned, per-session value: the caller that
//! owns the chat session owns the engine, and independent sessions share
//! nothing. Any failure inside the pipeline is swallowed here — and only
//! here — into the catalog's apology line; no call ever surfaces an error.

pub mod latency;

use chrono::Utc;

use crate::commands::{self, Command};
use crate::composer;
use crate::config::EngineConfig;
use crate::engine::latency::{NoLatency, ResponseLatency};
use crate::memory::ConversationMemory;
use crate::patterns::PatternSelector;
use crate::persona::{PersonaKey, PersonaRegistry, PersonalityProfile};
use crate::topics;
use crate::types::{SessionAnalytics, Turn};

/// One conversation session's response engine.
pub struct ConversationEngine {
    config: EngineConfig,
    registry: PersonaRegistry,
    active: PersonaKey,
    memory: ConversationMemory,
    selector: PatternSelector,
    latency: Box<dyn ResponseLatency>,
    responses_generated: u64,
}

impl ConversationEngine {
    /// Engine over a catalog, with an entropy-seeded pattern draw.
    pub fn new(config: EngineConfig) -> Self {
        Self::build(config, PatternSelector::new())
    }

    /// Engine with a fixed draw seed. Same seed, same inputs — byte-identical
    /// responses.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::build(config, PatternSelector::with_seed(seed))
    }

    fn build(config: EngineConfig, selector: PatternSelector) -> Self {
        let registry = PersonaRegistry::new(config.personas.clone());
        let active = config.default_persona;
        if !registry.contains(active) {
            log::warn!(
                "catalog '{}' does not register its default personality '{}'",
                config.variant_name,
                active.as_str()
            );
        }
        let memory = ConversationMemory::new(config.history_window);
        Self {
            config,
            registry,
            active,
            memory,
            selector,
            latency: Box::new(NoLatency),
            responses_generated: 0,
        }
    }

    /// Replace the latency simulator.
    pub fn with_latency(mut self, latency: Box<dyn ResponseLatency>) -> Self {
        self.latency = latency;
        self
    }

    /// Generate a reply to `text` given the caller's full message history.
    ///
    /// Always returns displayable markdown text. The caller must not issue a
    /// second call against the same engine while one is in flight.
    pub async fn generate_response(&mut self, text: &str, history: &[Turn]) -> String {
        // The suspension point comes first: every mutation below runs
        // synchronously after it, so an abandoned call cannot leave the
        // session partially updated.
        self.latency.simulate().await;

        self.memory.record_history(history);
        self.memory.observe_turn_count(history.len());
        self.responses_generated += 1;

        if let Some(command) = commands::parse(text, self.config.stats_enabled) {
            return self.run_command(command);
        }

        match self.respond(text) {
            Ok(reply) => reply,
            Err(err) => {
                log::error!("response generation failed: {err:#}");
                self.config.apology_line.clone()
            }
        }
    }

    /// The normal (non-command) generation path.
    fn respond(&mut self, text: &str) -> anyhow::Result<String> {
        let detected = topics::classify(text, &self.config.topic_rules);
        self.memory.note_topics(&detected);

        let opening = self.selector.select(text, &detected, &self.config)?;
        let profile = self.registry.lookup(self.active)?;

        Ok(composer::compose(
            &opening,
            profile,
            &detected,
            &self.memory,
            &self.config,
        ))
    }

    fn run_command(&mut self, command: Command) -> String {
        match command {
            Command::Help => commands::help_document(&self.registry, &self.config),
            Command::Stats => {
                let display_name = self
                    .registry
                    .lookup(self.active)
                    .map(|p| p.display_name.clone())
                    .unwrap_or_else(|_| self.active.as_str().to_string());
                commands::stats_report(&display_name, &self.memory, &self.config)
            }
            Command::Personality { name } => {
                if let Some(key) = PersonaKey::parse(&name) {
                    if let Ok(profile) = self.registry.lookup(key) {
                        let confirmation = commands::switch_confirmation(profile, &self.config);
                        self.active = key;
                        log::info!("personality switched to '{}'", key.as_str());
                        return confirmation;
                    }
                }
                commands::personality_listing(&self.registry)
            }
        }
    }

    /// Switch the active personality. Switching to the current key is fine;
    /// an unregistered key is ignored with a warning.
    pub fn set_personality(&mut self, key: PersonaKey) {
        if self.registry.contains(key) {
            self.active = key;
        } else {
            log::warn!(
                "ignoring switch to unregistered personality '{}'",
                key.as_str()
            );
        }
    }

    /// The personality currently answering.
    pub fn active_personality(&self) -> PersonaKey {
        self.active
    }

    /// Registered profiles in listing order.
    pub fn personalities(&self) -> &[PersonalityProfile] {
        self.registry.profiles()
    }

    /// Session report, for catalogs that enable it. `None` otherwise.
    pub fn session_analytics(&self) -> Option<SessionAnalytics> {
        if !self.config.stats_enabled {
            return None;
        }
        Some(SessionAnalytics {
            duration_minutes: (Utc::now() - self.memory.session_start()).num_minutes(),
            response_count: self.responses_generated,
            topics: self.memory.accumulated_topics().to_vec(),
            active_personality: self.active,
        })
    }

    /// Number of `generate_response` calls served so far.
    pub fn responses_generated(&self) -> u64 {
        self.responses_generated
    }

    /// Read access to the session memory.
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// The catalog this engine was built over.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::Topic;

    fn turns(texts: &[&str]) -> Vec<Turn> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if i % 2 == 0 {
                    Turn::user(*t)
                } else {
                    Turn::assistant(*t)
                }
            })
            .collect()
    }

    #[tokio::test]
    async fn test_composed_response_end_to_end() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 42);
        let reply = engine
            .generate_response(
                "Hello! Can you help me with a business strategy problem?",
                &[],
            )
            .await;

        assert!(!reply.is_empty());
        assert!(reply.ends_with(&engine.config().closing_line));
        assert!(engine
            .memory()
            .accumulated_topics()
            .contains(&Topic::BusinessStrategy));
        assert_eq!(engine.responses_generated(), 1);
    }

    #[tokio::test]
    async fn test_window_evicts_oldest_turn() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 1);
        let history: Vec<Turn> = (0..16)
            .map(|i| Turn::user(format!("message {i}")))
            .collect();
        engine.generate_response("What about our goals?", &history).await;

        assert_eq!(engine.memory().len(), 15);
        assert_eq!(engine.memory().window()[0].text, "message 1");
        assert_eq!(engine.memory().turn_count(), 16);
    }

    #[tokio::test]
    async fn test_stats_after_personality_switch() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 3);
        let history = turns(&["hello", "hi there", "what's new"]);

        let confirmation = engine
            .generate_response("/personality creative", &history)
            .await;
        assert!(confirmation.contains("Creative Strategist"));
        assert_eq!(engine.active_personality(), PersonaKey::Creative);

        let report = engine.generate_response("/stats", &history).await;
        assert!(report.contains("Creative Strategist"));
        assert!(report.contains("Duration: 0 minutes"));
        assert!(report.contains("Messages exchanged: 3"));
    }

    #[tokio::test]
    async fn test_help_and_unknown_switch_do_not_mutate() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 5);
        let before = engine.active_personality();

        engine.generate_response("/help", &[]).await;
        assert_eq!(engine.active_personality(), before);

        let listing = engine.generate_response("/personality visionary", &[]).await;
        assert!(listing.contains("Available Personalities"));
        assert_eq!(engine.active_personality(), before);

        let listing = engine.generate_response("/personality", &[]).await;
        assert!(listing.contains("/personality [name]"));
        assert_eq!(engine.active_personality(), before);
    }

    #[tokio::test]
    async fn test_listed_keys_match_switchable_keys() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 8);
        let keys: Vec<PersonaKey> = engine.personalities().iter().map(|p| p.key).collect();

        for key in keys {
            let reply = engine
                .generate_response(&format!("/personality {}", key.as_str()), &[])
                .await;
            assert!(
                reply.contains("Switched to"),
                "registered key '{}' was not accepted",
                key.as_str()
            );
            assert_eq!(engine.active_personality(), key);
        }

        // A key outside the catalog yields the listing instead.
        let reply = engine.generate_response("/personality helpful", &[]).await;
        assert!(reply.contains("Available Personalities"));
    }

    #[test]
    fn test_set_personality_is_idempotent_and_ignores_unknown() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 13);

        engine.set_personality(PersonaKey::Analytical);
        engine.set_personality(PersonaKey::Analytical);
        assert_eq!(engine.active_personality(), PersonaKey::Analytical);

        // Helpful is not in the business catalog.
        engine.set_personality(PersonaKey::Helpful);
        assert_eq!(engine.active_personality(), PersonaKey::Analytical);
    }

    #[tokio::test]
    async fn test_empty_pattern_tables_yield_apology_once() {
        let mut config = EngineConfig::business();
        config.greeting_openers.clear();
        config.question_openers.clear();
        config.help_openers.clear();
        config.topic_openers.clear();
        config.fallback_openers.clear();
        let apology = config.apology_line.clone();

        let mut engine = ConversationEngine::with_seed(config, 21);
        let reply = engine.generate_response("plain text", &[]).await;
        assert_eq!(reply, apology);
        assert_eq!(engine.responses_generated(), 1);
    }

    #[tokio::test]
    async fn test_missing_default_persona_yields_apology() {
        let mut config = EngineConfig::business();
        config.personas.retain(|p| p.key != PersonaKey::Professional);
        let apology = config.apology_line.clone();

        let mut engine = ConversationEngine::with_seed(config, 34);
        let reply = engine.generate_response("plain text", &[]).await;
        assert_eq!(reply, apology);
        // Commands still work in the degenerate catalog.
        let help = engine.generate_response("/help", &[]).await;
        assert!(help.contains("Commands"));
    }

    #[tokio::test]
    async fn test_casual_catalog_has_no_stats_surface() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::casual(), 55);
        assert!(engine.session_analytics().is_none());

        // "/stats" is ordinary text here and gets a composed reply.
        let reply = engine.generate_response("/stats", &[]).await;
        assert!(!reply.contains("Session Statistics"));
        assert!(reply.ends_with(&engine.config().closing_line));
    }

    #[tokio::test]
    async fn test_session_analytics_snapshot() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 89);
        engine
            .generate_response("our team needs a leadership plan", &[])
            .await;

        let analytics = engine.session_analytics().expect("business catalog reports");
        assert_eq!(analytics.duration_minutes, 0);
        assert_eq!(analytics.response_count, 1);
        assert!(analytics.topics.contains(&Topic::Leadership));
        assert_eq!(analytics.active_personality, PersonaKey::Professional);
    }

    #[tokio::test]
    async fn test_seeded_engines_agree_byte_for_byte() {
        let history = turns(&["hi", "hello!", "tell me about productivity"]);
        let mut a = ConversationEngine::with_seed(EngineConfig::business(), 144);
        let mut b = ConversationEngine::with_seed(EngineConfig::business(), 144);

        for text in ["hey there", "how do we improve efficiency?", "thanks"] {
            let ra = a.generate_response(text, &history).await;
            let rb = b.generate_response(text, &history).await;
            assert_eq!(ra, rb);
        }
    }

    #[tokio::test]
    async fn test_continuity_appears_in_ongoing_conversation() {
        let mut engine = ConversationEngine::with_seed(EngineConfig::business(), 233);
        let history = turns(&["first question", "an answer", "second question"]);
        let reply = engine.generate_response("second question", &history).await;
        assert!(reply.contains("Building on our previous discussion, "));
    }
}
