//! # Identity Resolution
//!
//! Resolves any one form of a user identifier into all three at once.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{decode_handle, encode_handle, encode_uuid};
use crate::error::IdentityError;
use crate::identity::{CoreUserId, NamespacedUuid, ServiceHandle};

/// Every form of one user's identifier.
///
/// The handle is always canonical, even when resolved from a handle with
/// leading zeros. Deserialization rebuilds the handle and UUID from `id` and
/// rejects input whose stored forms disagree with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserIdentityRepr")]
pub struct UserIdentity {
    /// Core user ID.
    pub id: CoreUserId,
    /// Canonical Heroku handle.
    pub handle: ServiceHandle,
    /// v5 UUID.
    pub uuid: NamespacedUuid,
}

impl UserIdentity {
    /// Resolve from a core user ID. Never fails.
    pub fn from_id(id: CoreUserId) -> Self {
        Self {
            id,
            handle: encode_handle(id),
            uuid: encode_uuid(id),
        }
    }

    /// Resolve from a Heroku handle.
    ///
    /// # Errors
    ///
    /// Same as [`decode_handle`].
    pub fn from_handle(handle: &str) -> Result<Self, IdentityError> {
        decode_handle(handle).map(Self::from_id)
    }
}

/// Wire form of [`UserIdentity`], checked before it is accepted.
#[derive(Deserialize)]
struct UserIdentityRepr {
    id: CoreUserId,
    handle: ServiceHandle,
    uuid: NamespacedUuid,
}

impl TryFrom<UserIdentityRepr> for UserIdentity {
    type Error = IdentityError;

    fn try_from(repr: UserIdentityRepr) -> Result<Self, Self::Error> {
        let identity = Self::from_id(repr.id);
        if repr.handle != identity.handle {
            return Err(IdentityError::Inconsistent {
                value: repr.handle.to_string(),
                id: repr.id.get(),
            });
        }
        if repr.uuid != identity.uuid {
            return Err(IdentityError::Inconsistent {
                value: repr.uuid.to_string(),
                id: repr.id.get(),
            });
        }
        Ok(identity)
    }
}

impl FromStr for UserIdentity {
    type Err = IdentityError;

    /// Accept either a bare decimal user ID or a Heroku handle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            s.parse::<CoreUserId>().map(Self::from_id)
        } else {
            Self::from_handle(s)
        }
    }
}
