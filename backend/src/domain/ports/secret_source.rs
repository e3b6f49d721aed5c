//! Port for the startup secret source.
//!
//! A secret source is consulted exactly once, before the HTTP listener starts.
//! Any error returned here aborts startup.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::SecretMap;

/// Errors raised by secret source adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretSourceError {
    /// The backing service could not be reached or refused the call.
    #[error("secret source is unavailable: {message}")]
    Unavailable { message: String },
    /// The backing service answered with an explicit failure.
    #[error("secret source reported an error: {message}")]
    Rejected { message: String },
    /// The answer did not decode to a flat string mapping.
    #[error("secret payload is malformed: {message}")]
    Malformed { message: String },
}

impl SecretSourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Capability returning the credential mapping the service boots with.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Fetch the current mapping of credential names to values.
    async fn fetch(&self) -> Result<SecretMap, SecretSourceError>;
}
