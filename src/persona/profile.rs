//! Personality profile types — keys, tones, and display data.

use serde::{Deserialize, Serialize};

/// Closed set of personality identities the engine knows about.
///
/// String keys exist only at the command and serialization boundary; inside
/// the engine a personality is always one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaKey {
    Professional,
    Creative,
    Analytical,
    Helpful,
}

impl PersonaKey {
    /// All keys in canonical order.
    pub const ALL: [PersonaKey; 4] = [
        Self::Professional,
        Self::Creative,
        Self::Analytical,
        Self::Helpful,
    ];

    /// The lowercase string form used in commands and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Analytical => "analytical",
            Self::Helpful => "helpful",
        }
    }

    /// Parse a user-supplied key. Trims whitespace, ignores case.
    pub fn parse(input: &str) -> Option<PersonaKey> {
        let normalized = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == normalized)
    }
}

/// Response tone. Selects the structural block the composer inserts after
/// the opening fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Creative,
    Analytical,
    Helpful,
}

impl Tone {
    /// Lowercase string form, used when interpolating confirmation text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Analytical => "analytical",
            Self::Helpful => "helpful",
        }
    }
}

/// An immutable personality registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    /// Identity of this profile. `lookup(key)` returns a profile whose
    /// `key` field equals the requested key.
    pub key: PersonaKey,
    /// Human-facing name, e.g. "Professional Assistant".
    pub display_name: String,
    /// One-line description shown in listings and switch confirmations.
    pub description: String,
    /// Tone driving the composer's structural block.
    pub tone: Tone,
    /// The profile's tone directive. Carried as data for callers that front
    /// the engine with a real language model; the engine itself renders it
    /// nowhere.
    pub prompt_directive: String,
    /// Emoji icon shown next to the profile in listings.
    pub icon: String,
}
