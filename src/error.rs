//! Error type shared by the field, polynomial, reconstruction and service layers

use thiserror::Error;

/// Errors reported by the sharing core
///
/// Every variant represents caller misuse; none of them is transient, so the
/// core never retries and never coerces the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharingError {
    /// Split inputs are malformed or out of range (secret, threshold or share count)
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Fewer shares than the minimum (2) or than the advertised threshold
    #[error("insufficient shares: need at least {required}, but only {provided} provided")]
    InsufficientShares { required: usize, provided: usize },

    /// A modular inverse of zero was requested, i.e. two shares have the same x
    #[error("division by zero: element has no inverse modulo the field prime")]
    DivisionByZero,

    /// The configured field modulus is not a usable prime
    #[error("invalid modulus: {0}")]
    InvalidModulus(String),

    /// A share cannot belong to the field (x = 0 or y outside [0, P))
    #[error("invalid share: {0}")]
    InvalidShare(String),
}

pub type Result<T> = std::result::Result<T, SharingError>;
