//! Cross-cutting error types for Scout.
//!
//! Domain-specific errors (e.g., `ApiError`, `WorkflowError`) live in their
//! respective crates; errors here can be raised by the core types alone.

use thiserror::Error;

/// Errors raised by core type parsing and validation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
