//! Startup credentials for the record store.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

/// Secret map key holding the store access key id.
pub const ACCESS_KEY_ID_KEY: &str = "AWS_ACCESS_KEY_ID";
/// Secret map key holding the store secret access key.
pub const SECRET_ACCESS_KEY_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Flat mapping of credential names to values returned by a secret source.
///
/// Values are wiped on drop and never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretMap(BTreeMap<String, Zeroizing<String>>);

impl SecretMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), Zeroizing::new(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|value| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SecretMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl fmt::Debug for SecretMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Credentials could not be recovered from a [`SecretMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("secret `{name}` is missing")]
    Missing { name: &'static str },
    #[error("secret `{name}` is empty")]
    Empty { name: &'static str },
}

/// Access key pair for the record store, held for the process lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    access_key_id: Zeroizing<String>,
    secret_access_key: Zeroizing<String>,
}

impl StoreCredentials {
    /// Recover the key pair from the secret mapping.
    ///
    /// # Examples
    /// ```
    /// use create_user_service::domain::{SecretMap, StoreCredentials};
    ///
    /// let secrets: SecretMap = [
    ///     ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
    ///     ("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI"),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let creds = StoreCredentials::from_secrets(&secrets).expect("both keys present");
    /// assert_eq!(creds.access_key_id(), "AKIDEXAMPLE");
    /// ```
    pub fn from_secrets(secrets: &SecretMap) -> Result<Self, CredentialsError> {
        Ok(Self {
            access_key_id: Zeroizing::new(required(secrets, ACCESS_KEY_ID_KEY)?.to_owned()),
            secret_access_key: Zeroizing::new(
                required(secrets, SECRET_ACCESS_KEY_KEY)?.to_owned(),
            ),
        })
    }

    pub fn access_key_id(&self) -> &str {
        self.access_key_id.as_str()
    }

    pub fn secret_access_key(&self) -> &str {
        self.secret_access_key.as_str()
    }
}

fn required<'a>(secrets: &'a SecretMap, name: &'static str) -> Result<&'a str, CredentialsError> {
    match secrets.get(name) {
        None => Err(CredentialsError::Missing { name }),
        Some(value) if value.trim().is_empty() => Err(CredentialsError::Empty { name }),
        Some(value) => Ok(value),
    }
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("access_key_id", &self.access_key_id.as_str())
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}
