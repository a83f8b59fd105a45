//! Cross-cutting utilities.

pub mod errors;
