//! Cross-cutting error types for Counsel.
//!
//! Domain-specific errors (e.g., `StoreError`, `ConfigError`) are defined in
//! their respective crates. Form failures have their own type in
//! [`crate::forms::FormErrors`] because they carry one message per field.
//! Everything converges into `anyhow` in `counsel-cli`.

use thiserror::Error;

/// Errors that can be raised by any Counsel crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: u32 },

    /// A string did not match any label of the expected enum.
    #[error("invalid {kind} '{value}' (expected one of: {expected})")]
    InvalidLabel {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
