//! # vault-user — User Identifier Conversions
//!
//! Deterministic, stateless conversions between the three forms of a Vault
//! user identifier:
//!
//! - **Core user ID** — the numeric ID in the system of record
//!   ([`CoreUserId`]).
//! - **Heroku handle** — `user<id>@heroku.com` ([`ServiceHandle`]).
//! - **v5 UUID** — SHA-1 UUID of `https://vault.heroku.com/users/<id>` under
//!   the URL namespace ([`NamespacedUuid`]).
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no global state. Every function is pure and safe to
//!   call from any thread.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Decoding never wraps or truncates: out-of-range digits are an error.
//!
//! ```
//! use vault_user::{decode_handle, encode_handle, encode_uuid, CoreUserId};
//!
//! let handle = encode_handle(CoreUserId(1));
//! assert_eq!(handle.as_str(), "user1@heroku.com");
//! assert_eq!(decode_handle("user1@heroku.com").unwrap(), CoreUserId(1));
//! assert_eq!(
//!     encode_uuid(CoreUserId(1)).to_string(),
//!     "aec1bd33-33fc-5e95-a814-7dc8248dba9b"
//! );
//! ```

pub mod codec;
pub mod error;
pub mod identity;
pub mod resolve;

// Re-export primary types for ergonomic imports.
pub use codec::{
    decode_handle, decode_uuid_from_handle, encode_handle, encode_uuid, HANDLE_PREFIX,
    HANDLE_SUFFIX, USER_NAMESPACE, UUID_NAME_PREFIX,
};
pub use error::IdentityError;
pub use identity::{CoreUserId, NamespacedUuid, ServiceHandle};
pub use resolve::UserIdentity;
