//! # Error Types
//!
//! Errors raised when decoding Heroku user handles. Encoding never fails,
//! so every variant here belongs to the decode path and carries the
//! rejected input verbatim.

use thiserror::Error;

/// Error decoding a user identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The input does not match `user<digits>@heroku.com`.
    #[error("{0} is not a valid Heroku user ID")]
    InvalidFormat(String),

    /// The handle is well-formed but its digits exceed the core user ID range.
    #[error("{0} is not a valid Heroku user ID: user ID exceeds {max}", max = u64::MAX)]
    Overflow(String),

    /// The input is not a decimal core user ID.
    #[error("{0} is not a valid core user ID")]
    InvalidUserId(String),

    /// A stored handle or UUID does not belong to the user ID it was stored with.
    #[error("{value} does not match user ID {id}")]
    Inconsistent {
        /// The stored handle or UUID text.
        value: String,
        /// The user ID it was stored with.
        id: u64,
    },
}

impl IdentityError {
    /// The rejected input, exactly as the caller supplied it.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat(s) | Self::Overflow(s) | Self::InvalidUserId(s) => s,
            Self::Inconsistent { value, .. } => value,
        }
    }
}
