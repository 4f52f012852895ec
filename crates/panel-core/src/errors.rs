//! Cross-cutting error types for Panel.
//!
//! Domain-specific errors (`DatabaseError`, `AccessError`, `AuthError`) live in
//! their respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Panel crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (blank fields, empty interviewer list, disallowed status).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
