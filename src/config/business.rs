//! The business catalog — the richer, business-oriented response set.

use crate::config::{strings, EngineConfig, InsightLine, TopicOpeners};
use crate::persona::{PersonaKey, PersonalityProfile, Tone};
use crate::topics::{Topic, TopicRule};

impl EngineConfig {
    /// Business-oriented catalog: three professional personas, ten topic
    /// rules, a 15-turn window, and session reporting enabled.
    pub fn business() -> Self {
        Self {
            variant_name: "business".into(),
            history_window: 15,
            selection_window: 3,
            stats_enabled: true,
            default_persona: PersonaKey::Professional,

            personas: vec![
                PersonalityProfile {
                    key: PersonaKey::Professional,
                    display_name: "Professional Assistant".into(),
                    description: "Expert business and productivity assistant".into(),
                    tone: Tone::Professional,
                    prompt_directive: "You are a professional assistant focused on business \
                        productivity, strategic thinking, and professional development. Provide \
                        clear, actionable, and business-oriented responses."
                        .into(),
                    icon: "💼".into(),
                },
                PersonalityProfile {
                    key: PersonaKey::Creative,
                    display_name: "Creative Strategist".into(),
                    description: "Innovation and creative problem-solving specialist".into(),
                    tone: Tone::Creative,
                    prompt_directive: "You are a creative strategist. Help with innovative \
                        thinking, creative problem-solving, brainstorming, and out-of-the-box \
                        solutions for business and personal challenges."
                        .into(),
                    icon: "🎨".into(),
                },
                PersonalityProfile {
                    key: PersonaKey::Analytical,
                    display_name: "Data Analyst".into(),
                    description: "Logical analysis and research specialist".into(),
                    tone: Tone::Analytical,
                    prompt_directive: "You are an analytical assistant specializing in data \
                        analysis, logical reasoning, research, and systematic problem-solving. \
                        Provide structured, evidence-based, and detailed responses."
                        .into(),
                    icon: "📊".into(),
                },
            ],

            topic_rules: vec![
                TopicRule::new(
                    Topic::BusinessStrategy,
                    &[
                        "strategy",
                        "planning",
                        "goals",
                        "objectives",
                        "growth",
                        "market",
                        "competition",
                        "revenue",
                    ],
                ),
                TopicRule::new(
                    Topic::ProjectManagement,
                    &[
                        "project",
                        "timeline",
                        "deadline",
                        "milestone",
                        "task",
                        "team",
                        "collaboration",
                        "workflow",
                    ],
                ),
                TopicRule::new(
                    Topic::Leadership,
                    &[
                        "leadership",
                        "management",
                        "team",
                        "motivation",
                        "communication",
                        "delegation",
                        "decision",
                    ],
                ),
                TopicRule::new(
                    Topic::Technology,
                    &[
                        "tech",
                        "software",
                        "digital",
                        "automation",
                        "ai",
                        "data",
                        "cloud",
                        "security",
                        "innovation",
                    ],
                ),
                TopicRule::new(
                    Topic::Finance,
                    &[
                        "budget",
                        "cost",
                        "investment",
                        "roi",
                        "profit",
                        "expense",
                        "financial",
                        "accounting",
                        "pricing",
                    ],
                ),
                TopicRule::new(
                    Topic::Marketing,
                    &[
                        "marketing",
                        "brand",
                        "customer",
                        "audience",
                        "campaign",
                        "content",
                        "social media",
                        "seo",
                    ],
                ),
                TopicRule::new(
                    Topic::Productivity,
                    &[
                        "productivity",
                        "efficiency",
                        "time management",
                        "organization",
                        "workflow",
                        "optimization",
                    ],
                ),
                TopicRule::new(
                    Topic::Career,
                    &[
                        "career",
                        "job",
                        "interview",
                        "resume",
                        "skills",
                        "development",
                        "promotion",
                        "networking",
                    ],
                ),
                TopicRule::new(
                    Topic::Innovation,
                    &[
                        "innovation",
                        "creative",
                        "idea",
                        "brainstorm",
                        "solution",
                        "design thinking",
                        "prototype",
                    ],
                ),
                TopicRule::new(
                    Topic::Analytics,
                    &[
                        "data",
                        "analysis",
                        "metrics",
                        "kpi",
                        "report",
                        "dashboard",
                        "insights",
                        "trends",
                        "statistics",
                    ],
                ),
            ],

            greeting_openers: strings(&[
                "Good to see you! I'm ready to assist with your professional needs today. What \
                 can I help you accomplish?",
                "Hello! I'm here to support your business objectives and productivity goals. \
                 What's on your agenda?",
                "Welcome back! Let's tackle your challenges and opportunities together. What \
                 would you like to focus on?",
            ]),
            question_openers: strings(&[
                "That's an excellent strategic question. Let me provide you with a comprehensive \
                 analysis...",
                "Great question! I'll break this down into actionable insights for you...",
                "Interesting challenge! Here's my professional assessment and recommendations...",
            ]),
            help_openers: strings(&[
                "I understand the challenge you're facing. Let's develop a strategic approach to \
                 resolve this...",
                "Every challenge is an opportunity for growth. Here's how I recommend we tackle \
                 this systematically...",
                "Let's work through this together with a structured problem-solving approach...",
            ]),
            topic_openers: vec![
                TopicOpeners {
                    topic: Topic::BusinessStrategy,
                    openers: strings(&[
                        "Strategic thinking is crucial for success. Here's my analysis of your \
                         situation...",
                        "From a strategic perspective, let's examine the key factors and \
                         opportunities...",
                    ]),
                },
                TopicOpeners {
                    topic: Topic::Leadership,
                    openers: strings(&[
                        "Leadership excellence requires both vision and execution. Here's what I \
                         recommend...",
                        "Effective leadership is about empowering others while driving results. \
                         Consider this approach...",
                    ]),
                },
                TopicOpeners {
                    topic: Topic::Productivity,
                    openers: strings(&[
                        "Productivity optimization is key to professional success. Here's how to \
                         enhance your efficiency...",
                        "Let's streamline your workflow and maximize your impact. Here's my \
                         recommendation...",
                    ]),
                },
            ],
            fallback_openers: strings(&[
                "I appreciate you bringing this to my attention. Here's my professional \
                 assessment...",
                "That's a valuable point to consider. Let me share some strategic insights...",
                "Thank you for the opportunity to assist. Here's how I can help you succeed...",
            ]),

            analytical_block: "\n\n**Analysis Framework:**\n\
                • **Current Situation**: Let me assess the key factors at play\n\
                • **Data Points**: Here are the relevant metrics and insights\n\
                • **Recommendations**: Based on the analysis, here's what I suggest\n\
                • **Next Steps**: Actionable items to move forward\n\n"
                .into(),
            creative_block: "\n\n**Creative Approach:**\n\
                Let's think outside the box and explore innovative solutions. Sometimes the best \
                breakthroughs come from unconventional thinking.\n\n"
                .into(),
            insight_lines: vec![
                InsightLine {
                    topic: Topic::BusinessStrategy,
                    line: "Strategic success requires clear vision, market understanding, and \
                           execution excellence. "
                        .into(),
                },
                InsightLine {
                    topic: Topic::Leadership,
                    line: "Effective leadership combines emotional intelligence with strategic \
                           decision-making. "
                        .into(),
                },
                InsightLine {
                    topic: Topic::Productivity,
                    line: "Peak productivity comes from optimizing both systems and mindset. "
                        .into(),
                },
                InsightLine {
                    topic: Topic::Technology,
                    line: "Technology should enhance human capability and drive business value. "
                        .into(),
                },
            ],
            continuity_clause: "Building on our previous discussion, ".into(),
            closing_line: "I'm here to support your continued success. What specific aspect \
                           would you like to dive deeper into?"
                .into(),

            apology_line: "I apologize for the technical difficulty. As your professional \
                           assistant, I'm committed to providing reliable service. Please try \
                           rephrasing your request, and I'll be happy to assist you."
                .into(),
            switch_prompt: "I'm now optimized for {tone} assistance. How can I help you achieve \
                            your goals?"
                .into(),
            help_title: "# 🤖 Business Assistant - Help Guide".into(),
            capability_lines: strings(&[
                "✅ **Business Strategy** - Strategic planning and analysis",
                "✅ **Project Management** - Workflow optimization",
                "✅ **Leadership** - Management and team guidance",
                "✅ **Technology** - Digital transformation insights",
                "✅ **Productivity** - Efficiency enhancement",
                "✅ **Analytics** - Data-driven decision making",
            ]),
            help_outro: "Ready to boost your professional success! What challenge shall we \
                         tackle?"
                .into(),
            stats_footer: "**Productivity Tip:** Regular breaks and focused sessions lead to \
                           better outcomes!"
                .into(),
        }
    }
}
