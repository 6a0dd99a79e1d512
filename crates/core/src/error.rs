//! Errors raised by the catalog, cart and order rules.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A rule of the shop refused an operation.
///
/// Reading stdin or writing stdout can also fail, but those errors stay in the
/// shell as `anyhow::Error`. Every variant here is something the user can
/// cause and recover from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input the rules reject: a zero quantity, a blank product name, an
    /// empty cart at checkout, a quantity or total that no longer fits.
    #[error("validation failed: {0}")]
    Validation(String),

    /// State that should be impossible, e.g. a just-appended order missing.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Two things claim the same identity, e.g. duplicate product codes.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
