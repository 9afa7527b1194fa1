//! # User Identity Newtypes
//!
//! Newtype wrappers for the three forms a Vault user identifier takes.
//! You cannot pass a raw `u64` where a [`CoreUserId`] is expected, nor an
//! unchecked string where a [`ServiceHandle`] is expected.
//!
//! ## Invariant
//!
//! A `ServiceHandle` value always matches `user<digits>@heroku.com` and its
//! digits always fit in a [`CoreUserId`]. Both constructors and serde
//! deserialization go through the same grammar check in [`crate::codec`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec;
use crate::error::IdentityError;

/// Numeric identifier of a user in the core system of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoreUserId(pub u64);

impl CoreUserId {
    /// Access the inner integer.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CoreUserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<CoreUserId> for u64 {
    fn from(id: CoreUserId) -> Self {
        id.0
    }
}

impl fmt::Display for CoreUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CoreUserId {
    type Err = IdentityError;

    /// Parse a plain decimal user ID.
    ///
    /// Only ASCII digits are accepted: no sign, no whitespace. Values above
    /// `u64::MAX` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_digits(s)
            .map(Self)
            .ok_or_else(|| IdentityError::InvalidUserId(s.to_string()))
    }
}

/// A Heroku user handle of the form `user<digits>@heroku.com`.
///
/// Handles produced by [`codec::encode_handle`] are canonical (no leading
/// zeros). Parsed handles keep the caller's text verbatim, so
/// `user007@heroku.com` displays as written while [`ServiceHandle::user_id`]
/// returns `7`.
///
/// Equality and hashing compare the handle text, so `user007@heroku.com` and
/// `user7@heroku.com` are unequal; compare [`ServiceHandle::user_id`] to ask
/// whether two handles name the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceHandle {
    handle: String,
    id: CoreUserId,
}

impl ServiceHandle {
    /// Validate and wrap a handle string.
    ///
    /// # Errors
    ///
    /// [`IdentityError::InvalidFormat`] if the grammar does not match,
    /// [`IdentityError::Overflow`] if the digits exceed `u64::MAX`.
    pub fn parse(handle: impl Into<String>) -> Result<Self, IdentityError> {
        let handle = handle.into();
        let id = codec::decode_handle(&handle)?;
        Ok(Self { handle, id })
    }

    /// Build the canonical handle for a user. Never fails.
    pub(crate) fn from_parts(handle: String, id: CoreUserId) -> Self {
        Self { handle, id }
    }

    /// The core user ID embedded in this handle.
    pub fn user_id(&self) -> CoreUserId {
        self.id
    }

    /// The handle text.
    pub fn as_str(&self) -> &str {
        &self.handle
    }
}

impl AsRef<str> for ServiceHandle {
    fn as_ref(&self) -> &str {
        &self.handle
    }
}

impl fmt::Display for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}

impl FromStr for ServiceHandle {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ServiceHandle {
    type Error = IdentityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<ServiceHandle> for String {
    fn from(handle: ServiceHandle) -> Self {
        handle.handle
    }
}

/// Deterministic v5 UUID for a user, derived from its core user ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespacedUuid(pub Uuid);

impl NamespacedUuid {
    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// Canonical lowercase hyphenated form, e.g. `aec1bd33-33fc-5e95-a814-7dc8248dba9b`.
impl fmt::Display for NamespacedUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
