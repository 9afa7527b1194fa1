//! # Identifier Codec
//!
//! Pure conversions between the three forms of a Vault user identifier:
//!
//! | From | To | Function |
//! |------|----|----------|
//! | core user ID | Heroku handle | [`encode_handle`] |
//! | core user ID | v5 UUID | [`encode_uuid`] |
//! | Heroku handle | core user ID | [`decode_handle`] |
//! | Heroku handle | v5 UUID | [`decode_uuid_from_handle`] |
//!
//! ## Compatibility
//!
//! The namespace, name template, and handle template are fixed. Changing
//! any of them changes every UUID Vault has ever issued for a user.
//!
//! ## Grammar
//!
//! A handle is `user`, one or more ASCII digits, then `@heroku.com`, with
//! nothing before or after. Matching is case-sensitive and does not trim
//! whitespace. Leading zeros in the digit run are accepted on decode; encode
//! never produces them.

use uuid::Uuid;

use crate::error::IdentityError;
use crate::identity::{CoreUserId, NamespacedUuid, ServiceHandle};

/// The RFC 4122 URL namespace, `6ba7b811-9dad-11d1-80b4-00c04fd430c8`.
pub const USER_NAMESPACE: Uuid = Uuid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

/// Name prefix hashed under [`USER_NAMESPACE`]; the decimal user ID follows.
pub const UUID_NAME_PREFIX: &str = "https://vault.heroku.com/users/";

/// Literal text before the digits of a handle.
pub const HANDLE_PREFIX: &str = "user";

/// Literal text after the digits of a handle.
pub const HANDLE_SUFFIX: &str = "@heroku.com";

/// Convert a core user ID into its Heroku handle, e.g. `user1234@heroku.com`.
pub fn encode_handle(id: CoreUserId) -> ServiceHandle {
    ServiceHandle::from_parts(format!("{HANDLE_PREFIX}{id}{HANDLE_SUFFIX}"), id)
}

/// Convert a core user ID into its v5 UUID.
///
/// The name is `https://vault.heroku.com/users/<id>` hashed with SHA-1 under
/// the URL namespace.
pub fn encode_uuid(id: CoreUserId) -> NamespacedUuid {
    let name = format!("{UUID_NAME_PREFIX}{id}");
    NamespacedUuid(Uuid::new_v5(&USER_NAMESPACE, name.as_bytes()))
}

/// Convert a Heroku handle into the core user ID it embeds.
///
/// # Errors
///
/// - [`IdentityError::InvalidFormat`] when `handle` does not match the
///   grammar.
/// - [`IdentityError::Overflow`] when the digits exceed `u64::MAX`.
pub fn decode_handle(handle: &str) -> Result<CoreUserId, IdentityError> {
    let digits = handle
        .strip_prefix(HANDLE_PREFIX)
        .and_then(|rest| rest.strip_suffix(HANDLE_SUFFIX))
        .filter(|digits| is_digit_run(digits))
        .ok_or_else(|| IdentityError::InvalidFormat(handle.to_string()))?;

    digits
        .parse::<u64>()
        .map(CoreUserId)
        .map_err(|_| IdentityError::Overflow(handle.to_string()))
}

/// Convert a Heroku handle into the v5 UUID of the user it names.
///
/// Equivalent to [`decode_handle`] followed by [`encode_uuid`], so
/// `user007@heroku.com` and `user7@heroku.com` map to the same UUID.
///
/// # Errors
///
/// Same as [`decode_handle`].
pub fn decode_uuid_from_handle(handle: &str) -> Result<NamespacedUuid, IdentityError> {
    decode_handle(handle).map(encode_uuid)
}

/// Parse a bare decimal digit run. `None` on empty, non-digit, or overflow.
pub(crate) fn parse_digits(s: &str) -> Option<u64> {
    if is_digit_run(s) {
        s.parse().ok()
    } else {
        None
    }
}

// `u64::from_str` also accepts a leading `+`, so check explicitly.
fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_is_url_namespace() {
        assert_eq!(USER_NAMESPACE, Uuid::NAMESPACE_URL);
        assert_eq!(
            USER_NAMESPACE.to_string(),
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
    }

    #[test]
    fn test_encode_handle() {
        assert_eq!(encode_handle(CoreUserId(1234)).as_str(), "user1234@heroku.com");
        assert_eq!(encode_handle(CoreUserId(0)).as_str(), "user0@heroku.com");
        assert_eq!(encode_handle(CoreUserId(7)).user_id(), CoreUserId(7));
    }

    #[test]
    fn test_encode_uuid_known_vector() {
        assert_eq!(
            encode_uuid(CoreUserId(1)).to_string(),
            "aec1bd33-33fc-5e95-a814-7dc8248dba9b"
        );
    }

    #[test]
    fn test_encode_uuid_matches_manual_v5() {
        let manual = Uuid::new_v5(&Uuid::NAMESPACE_URL, b"https://vault.heroku.com/users/1");
        assert_eq!(*encode_uuid(CoreUserId(1)).as_uuid(), manual);
    }

    #[test]
    fn test_encode_uuid_is_version_5() {
        let uuid = encode_uuid(CoreUserId(99));
        assert_eq!(uuid.as_uuid().get_version_num(), 5);
        assert_eq!(uuid.as_uuid().get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_decode_handle_valid() {
        assert_eq!(decode_handle("user1234@heroku.com"), Ok(CoreUserId(1234)));
        assert_eq!(decode_handle("user0@heroku.com"), Ok(CoreUserId(0)));
        assert_eq!(decode_handle("user0042@heroku.com"), Ok(CoreUserId(42)));
    }

    #[test]
    fn test_decode_handle_invalid_format() {
        let cases = [
            "1234@heroku.com",
            "user1234heroku.com",
            "user@heroku.com",
            "",
            "user",
            "@heroku.com",
            "User1234@heroku.com",
            "user1234@Heroku.com",
            " user1234@heroku.com",
            "user1234@heroku.com ",
            "user1234@heroku.com\n",
            "xuser1234@heroku.com",
            "user1234@heroku.comx",
            "user12a4@heroku.com",
            "user+1234@heroku.com",
            "user-1@heroku.com",
            "user1234@heroku.org",
            "user١٢٣@heroku.com",
        ];
        for input in cases {
            assert_eq!(
                decode_handle(input),
                Err(IdentityError::InvalidFormat(input.to_string())),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn test_decode_handle_max_boundary() {
        let handle = encode_handle(CoreUserId(u64::MAX));
        assert_eq!(handle.as_str(), "user18446744073709551615@heroku.com");
        assert_eq!(decode_handle(handle.as_str()), Ok(CoreUserId(u64::MAX)));
    }

    #[test]
    fn test_decode_handle_overflow() {
        let input = "user18446744073709551616@heroku.com";
        assert_eq!(
            decode_handle(input),
            Err(IdentityError::Overflow(input.to_string()))
        );

        let long = format!("user{}@heroku.com", "9".repeat(200));
        assert_eq!(decode_handle(&long), Err(IdentityError::Overflow(long.clone())));
    }

    #[test]
    fn test_decode_handle_leading_zeros_at_boundary() {
        let input = "user00018446744073709551615@heroku.com";
        assert_eq!(decode_handle(input), Ok(CoreUserId(u64::MAX)));
    }

    #[test]
    fn test_decode_uuid_from_handle() {
        assert_eq!(
            decode_uuid_from_handle("user42@heroku.com"),
            Ok(encode_uuid(CoreUserId(42)))
        );
        assert_eq!(
            decode_uuid_from_handle("user042@heroku.com"),
            Ok(encode_uuid(CoreUserId(42)))
        );
    }

    #[test]
    fn test_decode_uuid_from_handle_fails_like_decode_handle() {
        for input in ["user@heroku.com", "", "user1heroku.com"] {
            assert_eq!(
                decode_uuid_from_handle(input),
                Err(IdentityError::InvalidFormat(input.to_string()))
            );
        }
        let input = "user99999999999999999999@heroku.com";
        assert_eq!(
            decode_uuid_from_handle(input),
            Err(IdentityError::Overflow(input.to_string()))
        );
    }
}
