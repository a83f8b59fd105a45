//! Ordered personality registry with key lookup.

use crate::persona::profile::{PersonaKey, PersonalityProfile};
use crate::utilities::errors::EngineError;

/// A fixed mapping from personality key to profile.
///
/// Iteration order is registration order. The registry has no mutation
/// operations; it is built once from the catalog's profile list.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    profiles: Vec<PersonalityProfile>,
}

impl PersonaRegistry {
    /// Build a registry from catalog profiles, preserving their order.
    pub fn new(profiles: Vec<PersonalityProfile>) -> Self {
        Self { profiles }
    }

    /// Look up a profile by key.
    pub fn lookup(&self, key: PersonaKey) -> Result<&PersonalityProfile, EngineError> {
        self.profiles
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| EngineError::UnknownPersonality {
                key: key.as_str().to_string(),
            })
    }

    /// Whether a key is registered.
    pub fn contains(&self, key: PersonaKey) -> bool {
        self.profiles.iter().any(|p| p.key == key)
    }

    /// All profiles in registration order.
    pub fn profiles(&self) -> &[PersonalityProfile] {
        &self.profiles
    }
}
