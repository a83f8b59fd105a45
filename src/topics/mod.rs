//! Topic tags and the keyword classifier.
//!
//! Classification is a deterministic heuristic: lowercase the input and check
//! each catalog rule's keywords for substring containment. There is no
//! stemming and no word-boundary requirement, so a keyword like "ai" matches
//! inside "said"; see `test_substring_match_has_no_word_boundaries`.

use serde::{Deserialize, Serialize};

/// Closed set of subject-matter tags across all catalogs.
///
/// The kebab-case string form (`business-strategy`, …) appears only at the
/// serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    BusinessStrategy,
    ProjectManagement,
    Leadership,
    Technology,
    Finance,
    Marketing,
    Productivity,
    Career,
    Innovation,
    Analytics,
    Business,
    Creativity,
}

impl Topic {
    /// The kebab-case tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessStrategy => "business-strategy",
            Self::ProjectManagement => "project-management",
            Self::Leadership => "leadership",
            Self::Technology => "technology",
            Self::Finance => "finance",
            Self::Marketing => "marketing",
            Self::Productivity => "productivity",
            Self::Career => "career",
            Self::Innovation => "innovation",
            Self::Analytics => "analytics",
            Self::Business => "business",
            Self::Creativity => "creativity",
        }
    }

    /// Human-readable label for reports: the tag with dashes spaced out.
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

/// One classifier table entry: a tag plus its trigger keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: Vec<String>,
}

impl TopicRule {
    pub fn new(topic: Topic, keywords: &[&str]) -> Self {
        Self {
            topic,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Classify free text against a rule table.
///
/// Pure and deterministic. Returns each matched tag once, in rule-table
/// order. An empty result is valid: no topics detected.
pub fn classify(text: &str, rules: &[TopicRule]) -> Vec<Topic> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .filter(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw.as_str())))
        .map(|rule| rule.topic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<TopicRule> {
        vec![
            TopicRule::new(Topic::Technology, &["tech", "software", "ai"]),
            TopicRule::new(Topic::Leadership, &["leadership", "management", "team"]),
        ]
    }

    #[test]
    fn test_classify_is_pure() {
        let text = "our software roadmap needs a stronger team";
        let first = classify(text, &rules());
        let second = classify(text, &rules());
        assert_eq!(first, second);
        assert_eq!(first, vec![Topic::Technology, Topic::Leadership]);
    }

    #[test]
    fn test_empty_input_matches_nothing() {
        assert!(classify("", &rules()).is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let topics = classify("our SOFTWARE roadmap", &rules());
        assert!(topics.contains(&Topic::Technology));
    }

    #[test]
    fn test_substring_match_has_no_word_boundaries() {
        // "ai" inside "said" still counts.
        let topics = classify("she said yes", &rules());
        assert!(topics.contains(&Topic::Technology));
    }

    #[test]
    fn test_each_tag_reported_once() {
        let topics = classify("tech software ai", &rules());
        assert_eq!(topics, vec![Topic::Technology]);
    }

    #[test]
    fn test_tag_serde_is_kebab_case() {
        let json = serde_json::to_string(&Topic::BusinessStrategy).unwrap();
        assert_eq!(json, "\"business-strategy\"");
        assert_eq!(Topic::ProjectManagement.label(), "project management");
    }
}
