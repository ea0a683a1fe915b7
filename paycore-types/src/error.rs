//! Error types for the payment core.
//!
//! Exactly two failure categories exist: a precondition violation on a
//! directly-supplied input, and a reference to an entity that does not
//! exist. Every component fails fast and propagates the first failure
//! unchanged to its caller.

/// Errors surfaced by the payment core.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// A caller-supplied input violated a precondition (missing value,
    /// non-positive amount, duplicate save, inactive user). Always
    /// detected before any state mutation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced entity does not exist (missing user on creation,
    /// missing payment on a message edit).
    #[error("Not found: {0}")]
    NotFound(String),
}

impl PaymentError {
    /// Creates an `InvalidArgument` error with the given reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Creates a `NotFound` error with the given reason.
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound(reason.into())
    }
}
