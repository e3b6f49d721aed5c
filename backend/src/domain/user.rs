//! User records flowing through account creation.
//!
//! Nothing here validates format, uniqueness or length. Fields the caller
//! omits stay absent all the way to the store and the event payload, and are
//! left out of every serialised form.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Public profile fields of a user.
///
/// This is also the `201 Created` response body, so it never carries a
/// password in any form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Plaintext password supplied at registration.
///
/// Wiped on drop and redacted from `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a caller-supplied password.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the plaintext for hashing.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Salted one-way hash of a [`Password`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a hasher adapter.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Registration request as understood by the domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub profile: UserProfile,
    pub password: Option<Password>,
}

/// User record as persisted and announced: the profile plus the password hash.
///
/// # Examples
/// ```
/// use create_user_service::domain::{PasswordHash, StoredUser, UserProfile};
///
/// let profile = UserProfile { username: Some("ab1".into()), ..UserProfile::default() };
/// let stored = StoredUser::new(profile, PasswordHash::new("$2b$10$abc"));
/// let json = serde_json::to_value(&stored).expect("serialise");
/// assert_eq!(json["username"], "ab1");
/// assert_eq!(json["password"], "$2b$10$abc");
/// assert!(json.get("email").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(flatten)]
    profile: UserProfile,
    password: PasswordHash,
}

impl StoredUser {
    pub fn new(profile: UserProfile, password: PasswordHash) -> Self {
        Self { profile, password }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password
    }

    /// Drop the hash, keeping only what may be returned to the caller.
    pub fn into_profile(self) -> UserProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn full_profile() -> UserProfile {
        UserProfile {
            first_name: Some("A".into()),
            last_name: Some("B".into()),
            email: Some("a@b.com".into()),
            username: Some("ab1".into()),
        }
    }

    #[rstest]
    fn profile_serialises_camel_case(full_profile: UserProfile) {
        let value = serde_json::to_value(&full_profile).expect("serialise profile");
        assert_eq!(
            value,
            json!({ "firstName": "A", "lastName": "B", "email": "a@b.com", "username": "ab1" })
        );
    }

    #[rstest]
    fn profile_deserialises_with_missing_fields() {
        let profile: UserProfile =
            serde_json::from_value(json!({ "email": "x@y.z" })).expect("partial profile");
        assert_eq!(profile.email.as_deref(), Some("x@y.z"));
        assert!(profile.first_name.is_none());
        assert!(profile.username.is_none());
    }

    #[rstest]
    fn stored_user_keeps_profile_fields_beside_hash(full_profile: UserProfile) {
        let stored = StoredUser::new(full_profile.clone(), PasswordHash::new("hash"));
        let value = serde_json::to_value(&stored).expect("serialise stored user");
        assert_eq!(value.get("password").and_then(Value::as_str), Some("hash"));
        assert_eq!(value.get("firstName").and_then(Value::as_str), Some("A"));
        assert_eq!(stored.into_profile(), full_profile);
    }

    #[rstest]
    fn secrets_are_redacted_from_debug() {
        let password = Password::new("secret");
        let hash = PasswordHash::new("$2b$10$hash");
        assert!(!format!("{password:?}").contains("secret"));
        assert!(!format!("{hash:?}").contains("$2b$"));
        assert_eq!(password.expose(), "secret");
    }
}
