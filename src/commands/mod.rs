//! Reserved slash directives, intercepted before normal generation.
//!
//! Three directives exist: `/personality [name]`, `/help`, and `/stats`
//! (the last only in catalogs that enable it). Matching trims whitespace and
//! ignores case. Anything else — including unrecognized slash-prefixed text —
//! falls through to ordinary classification and composition.

use chrono::Utc;

use crate::config::EngineConfig;
use crate::memory::ConversationMemory;
use crate::persona::{PersonaRegistry, PersonalityProfile};

/// A recognized reserved directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/personality <name>` — switch profile, or list the catalog when the
    /// name is empty or unknown.
    Personality { name: String },
    /// `/help` — catalog help document.
    Help,
    /// `/stats` — session report.
    Stats,
}

/// Parse a reserved directive out of raw input.
///
/// Returns `None` for everything that should go through normal generation.
/// `stats_enabled` controls whether `/stats` is recognized at all — in
/// catalogs without it the input is ordinary text, not an error.
pub fn parse(raw: &str, stats_enabled: bool) -> Option<Command> {
    let lowered = raw.trim().to_lowercase();

    if let Some(rest) = lowered.strip_prefix("/personality") {
        let name = if rest.is_empty() {
            String::new()
        } else if rest.starts_with(char::is_whitespace) {
            rest.trim().to_string()
        } else {
            // Fused suffix ("/personalitycreative") never names a key, so
            // the command yields the listing rather than a switch.
            lowered.clone()
        };
        return Some(Command::Personality { name });
    }
    if lowered == "/help" {
        return Some(Command::Help);
    }
    if stats_enabled && lowered == "/stats" {
        return Some(Command::Stats);
    }
    None
}

/// Confirmation for a completed personality switch.
pub fn switch_confirmation(profile: &PersonalityProfile, config: &EngineConfig) -> String {
    format!(
        "{} **Switched to {}**\n\n{}\n\n{}",
        profile.icon,
        profile.display_name,
        profile.description,
        config.switch_prompt.replace("{tone}", profile.tone.as_str())
    )
}

/// The catalog listing shown for an empty or unknown personality name.
pub fn personality_listing(registry: &PersonaRegistry) -> String {
    let entries = registry
        .profiles()
        .iter()
        .map(|p| format!("{} **{}**: {}", p.icon, p.key.as_str(), p.description))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "**Available Personalities:**\n\n{entries}\n\nUse \"/personality [name]\" to switch modes."
    )
}

/// The catalog help document, generated from the live registry.
pub fn help_document(registry: &PersonaRegistry, config: &EngineConfig) -> String {
    let personalities = registry
        .profiles()
        .iter()
        .map(|p| format!("{} **/{}**: {}", p.icon, p.key.as_str(), p.description))
        .collect::<Vec<_>>()
        .join("\n");

    let mut command_lines = vec![
        "• **/personality [name]** - Switch personality".to_string(),
        "• **/help** - Show this help guide".to_string(),
    ];
    if config.stats_enabled {
        command_lines.push("• **/stats** - View session statistics".to_string());
    }

    format!(
        "{}\n\n## **Personalities**\n{}\n\n## **Commands**\n{}\n\n## **Capabilities**\n{}\n\n{}",
        config.help_title,
        personalities,
        command_lines.join("\n"),
        config.capability_lines.join("\n"),
        config.help_outro
    )
}

/// The `/stats` session report.
pub fn stats_report(
    active_display_name: &str,
    memory: &ConversationMemory,
    config: &EngineConfig,
) -> String {
    let duration_minutes = (Utc::now() - memory.session_start()).num_minutes();

    let topics = if memory.accumulated_topics().is_empty() {
        "• No specific topics identified yet".to_string()
    } else {
        memory
            .recent_topics()
            .iter()
            .map(|t| format!("• {}", t.label()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "# 📊 Session Statistics\n\n**Current Session:**\n\
         • Duration: {} minutes\n\
         • Messages exchanged: {}\n\
         • Active personality: {}\n\n\
         **Topics Discussed:**\n{}\n\n{}",
        duration_minutes,
        memory.turn_count(),
        active_display_name,
        topics,
        config.stats_footer
    )
}
