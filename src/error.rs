//! Error handling for the digest oracle.
//!
//! The taxonomy is deliberately small: arithmetic over the field is total,
//! so the only failure surfaces are input parsing, a misused exponent, and
//! a range guard that signals an internal bug rather than a user error.

use thiserror::Error;

/// All errors the digest oracle can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A supplied preimage is not a valid base-10 integer literal.
    #[error("invalid integer literal: {0:?}")]
    ParseError(String),

    /// A negative exponent was passed to modular exponentiation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A field element was observed outside [0, p). Unreachable through
    /// the public constructors; indicates a bug in the reduction path.
    #[error("field element out of range: {0}")]
    RangeInvariantViolation(String),
}

/// Result type for digest oracle operations.
pub type EngineResult<T> = Result<T, EngineError>;
