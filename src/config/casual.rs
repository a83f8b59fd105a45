//! The casual catalog — the lighter general-purpose response set.

use crate::config::{strings, EngineConfig, InsightLine, TopicOpeners};
use crate::persona::{PersonaKey, PersonalityProfile, Tone};
use crate::topics::{Topic, TopicRule};

impl EngineConfig {
    /// General-purpose catalog: three everyday personas, three topic rules,
    /// a 10-turn window, and no session reporting.
    pub fn casual() -> Self {
        Self {
            variant_name: "casual".into(),
            history_window: 10,
            selection_window: 3,
            stats_enabled: false,
            default_persona: PersonaKey::Helpful,

            personas: vec![
                PersonalityProfile {
                    key: PersonaKey::Helpful,
                    display_name: "Friendly Helper".into(),
                    description: "Everyday questions and practical guidance".into(),
                    tone: Tone::Helpful,
                    prompt_directive: "You are a friendly, approachable assistant. Give clear, \
                        practical answers to everyday questions without jargon."
                        .into(),
                    icon: "🤝".into(),
                },
                PersonalityProfile {
                    key: PersonaKey::Creative,
                    display_name: "Idea Partner".into(),
                    description: "Brainstorming and playful reframing".into(),
                    tone: Tone::Creative,
                    prompt_directive: "You are an imaginative brainstorming partner. Offer fresh \
                        angles, unexpected connections, and playful reframings."
                        .into(),
                    icon: "🎨".into(),
                },
                PersonalityProfile {
                    key: PersonaKey::Analytical,
                    display_name: "Clear Thinker".into(),
                    description: "Step-by-step reasoning and structured answers".into(),
                    tone: Tone::Analytical,
                    prompt_directive: "You are a methodical assistant. Reason step by step and \
                        present answers in a clear, ordered structure."
                        .into(),
                    icon: "🔍".into(),
                },
            ],

            topic_rules: vec![
                TopicRule::new(
                    Topic::Technology,
                    &["tech", "software", "computer", "app", "internet", "ai", "digital"],
                ),
                TopicRule::new(
                    Topic::Business,
                    &["business", "work", "company", "startup", "market", "customer"],
                ),
                TopicRule::new(
                    Topic::Creativity,
                    &["creative", "idea", "design", "art", "write", "brainstorm", "inspiration"],
                ),
            ],

            greeting_openers: strings(&[
                "Hey there! Great to chat with you. What's on your mind today?",
                "Hello! I'm all ears — what would you like to talk about?",
                "Hi! Good to see you. How can I help today?",
            ]),
            question_openers: strings(&[
                "Good question! Here's how I'd think about it...",
                "Let me take a crack at that...",
                "Happy to help with that one. Here's my take...",
            ]),
            help_openers: strings(&[
                "That sounds tricky — let's untangle it together...",
                "No worries, we'll sort this out step by step...",
            ]),
            topic_openers: vec![
                TopicOpeners {
                    topic: Topic::Technology,
                    openers: strings(&[
                        "Tech questions are my favorite. Here's what I'd look at...",
                        "There's usually a simpler way to handle tech problems than it first \
                         seems. Let's see...",
                    ]),
                },
                TopicOpeners {
                    topic: Topic::Creativity,
                    openers: strings(&[
                        "Ooh, a creative one! Let's play with some ideas...",
                        "Creative blocks usually hide a good idea underneath. Let's dig...",
                    ]),
                },
                TopicOpeners {
                    topic: Topic::Business,
                    openers: strings(&[
                        "Work stuff — let's make it manageable. Here's a thought...",
                    ]),
                },
            ],
            fallback_openers: strings(&[
                "Thanks for sharing that. Here's what comes to mind...",
                "Interesting! Let me offer a thought or two...",
                "I hear you. Here's one way to look at it...",
            ]),

            analytical_block: "\n\n**Let's break it down:**\n\
                1. First, what we know about the situation\n\
                2. Then, the options worth weighing\n\
                3. Finally, a practical next step\n\n"
                .into(),
            creative_block: "\n\n**Another angle:**\n\
                What if we flipped the problem around? Unexpected angles often hide the best \
                answers.\n\n"
                .into(),
            insight_lines: vec![
                InsightLine {
                    topic: Topic::Technology,
                    line: "Most tech headaches get smaller once you break them into steps. ".into(),
                },
                InsightLine {
                    topic: Topic::Business,
                    line: "Work challenges usually come down to people, priorities, or process. "
                        .into(),
                },
                InsightLine {
                    topic: Topic::Creativity,
                    line: "Good ideas show up more often when you give rough ones room to \
                           breathe. "
                        .into(),
                },
            ],
            continuity_clause: "Building on what we discussed earlier, ".into(),
            closing_line: "Happy to keep going — what would you like to explore next?".into(),

            apology_line: "Sorry — something went wrong on my end. Could you try saying that \
                           another way?"
                .into(),
            switch_prompt: "I'll keep things {tone} from here. What shall we chat about?".into(),
            help_title: "# 🤖 Chat Assistant - Help Guide".into(),
            capability_lines: strings(&[
                "✅ **Everyday Questions** - Practical answers without jargon",
                "✅ **Technology** - Apps, software, and digital life",
                "✅ **Creativity** - Brainstorming and idea development",
            ]),
            help_outro: "That's everything — what would you like to talk about?".into(),
            // This catalog has no /stats surface.
            stats_footer: String::new(),
        }
    }
}
