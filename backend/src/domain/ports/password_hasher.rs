//! Port for one-way password hashing.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Password, PasswordHash};

/// Errors raised while hashing a password.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The request carried no password to hash.
    #[error("password is required")]
    MissingPassword,
    /// The hashing primitive failed.
    #[error("password hashing failed: {message}")]
    Failed { message: String },
}

impl HashError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Salted adaptive hash used for stored passwords.
///
/// Two calls with the same password must yield different hashes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError>;
}
