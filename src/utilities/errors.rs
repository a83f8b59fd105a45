//! Error types for the response engine.
//!
//! None of these are fatal. Components signal failure upward; the engine
//! facade is the only place allowed to swallow an error, and it does so by
//! substituting the active catalog's apology line.

use thiserror::Error;

/// Errors surfaced by engine components.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Requested personality key is not present in the active registry.
    #[error("unknown personality: {key}")]
    UnknownPersonality { key: String },

    /// Pattern selection found no candidates to draw from.
    ///
    /// Unreachable with the built-in catalogs (fallback openers are always
    /// appended); a custom catalog with empty tables can trigger it.
    #[error("pattern pool is empty")]
    EmptyPatternPool,

    /// A catalog file could not be read or decoded.
    #[error("catalog file '{path}': {message}")]
    CatalogFile { path: String, message: String },
}
