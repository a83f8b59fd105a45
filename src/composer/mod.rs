//! Response assembly.
//!
//! Pure string composition — all randomness stays in the pattern selector,
//! so given the same opening, profile, topics, and memory the output is
//! identical. Structure, in order: opening fragment, tone block, at most one
//! topic insight, continuity clause when the window shows an ongoing
//! exchange, closing line.

use crate::config::EngineConfig;
use crate::memory::ConversationMemory;
use crate::persona::{PersonalityProfile, Tone};
use crate::topics::Topic;

/// Assemble the final response text.
pub fn compose(
    opening: &str,
    profile: &PersonalityProfile,
    topics: &[Topic],
    memory: &ConversationMemory,
    config: &EngineConfig,
) -> String {
    let mut response = String::from(opening);

    match profile.tone {
        Tone::Analytical => response.push_str(&config.analytical_block),
        Tone::Creative => response.push_str(&config.creative_block),
        _ => response.push_str("\n\n"),
    }

    // First matching insight wins; later matches contribute nothing.
    if let Some(insight) = config
        .insight_lines
        .iter()
        .find(|entry| topics.contains(&entry.topic))
    {
        response.push_str(&insight.line);
    }

    // An ongoing exchange is more than one user-authored turn in the window
    // (the current utterance is usually already among them).
    if memory.user_turns_in_window() > 1 {
        response.push_str("\n\n");
        response.push_str(&config.continuity_clause);
    }

    response.push_str(&config.closing_line);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaKey;
    use crate::types::Turn;

    fn profile_with_tone(tone: Tone) -> PersonalityProfile {
        PersonalityProfile {
            key: PersonaKey::Professional,
            display_name: "Tester".into(),
            description: "test profile".into(),
            tone,
            prompt_directive: String::new(),
            icon: "🤖".into(),
        }
    }

    fn empty_memory() -> ConversationMemory {
        ConversationMemory::new(15)
    }

    #[test]
    fn test_analytical_tone_inserts_framework_block() {
        let config = EngineConfig::business();
        let out = compose(
            "Opening.",
            &profile_with_tone(Tone::Analytical),
            &[],
            &empty_memory(),
            &config,
        );
        assert!(out.starts_with("Opening."));
        assert!(out.contains("**Analysis Framework:**"));
        assert!(out.ends_with(&config.closing_line));
    }

    #[test]
    fn test_creative_tone_inserts_reframing_block() {
        let config = EngineConfig::business();
        let out = compose(
            "Opening.",
            &profile_with_tone(Tone::Creative),
            &[],
            &empty_memory(),
            &config,
        );
        assert!(out.contains("**Creative Approach:**"));
    }

    #[test]
    fn test_other_tones_get_plain_paragraph_break() {
        let config = EngineConfig::business();
        let out = compose(
            "Opening.",
            &profile_with_tone(Tone::Professional),
            &[],
            &empty_memory(),
            &config,
        );
        assert_eq!(out, format!("Opening.\n\n{}", config.closing_line));
    }

    #[test]
    fn test_only_first_priority_insight_contributes() {
        let config = EngineConfig::business();
        // Both Leadership and Technology matched; Leadership outranks.
        let out = compose(
            "Opening.",
            &profile_with_tone(Tone::Professional),
            &[Topic::Technology, Topic::Leadership],
            &empty_memory(),
            &config,
        );
        assert!(out.contains("Effective leadership combines"));
        assert!(!out.contains("Technology should enhance"));
    }

    #[test]
    fn test_continuity_requires_more_than_one_user_turn() {
        let config = EngineConfig::business();
        let profile = profile_with_tone(Tone::Professional);

        let mut one_user_turn = empty_memory();
        one_user_turn.record_history(&[Turn::user("first")]);
        let out = compose("Opening.", &profile, &[], &one_user_turn, &config);
        assert!(!out.contains(&config.continuity_clause));

        let mut ongoing = empty_memory();
        ongoing.record_history(&[
            Turn::user("first"),
            Turn::assistant("reply"),
            Turn::user("second"),
        ]);
        let out = compose("Opening.", &profile, &[], &ongoing, &config);
        assert!(out.contains("Building on our previous discussion, "));
        // The clause flows straight into the closing line.
        assert!(out.ends_with(&format!(
            "{}{}",
            config.continuity_clause, config.closing_line
        )));
    }

    #[test]
    fn test_closing_line_always_present() {
        for config in [EngineConfig::business(), EngineConfig::casual()] {
            let out = compose(
                "Opening.",
                &profile_with_tone(Tone::Helpful),
                &[],
                &empty_memory(),
                &config,
            );
            assert!(out.ends_with(&config.closing_line));
        }
    }
}
