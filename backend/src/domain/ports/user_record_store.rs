//! Port for the user record store.
//!
//! Writes are unconditional: a duplicate username or email overwrites or
//! coexists according to the table's own key schema.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::StoredUser;

/// Errors surfaced by record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreWriteError {
    /// The store could not be reached.
    #[error("user store is unavailable: {message}")]
    Unavailable { message: String },
    /// The store received the write and refused it.
    #[error("user store rejected the write: {message}")]
    Rejected { message: String },
}

impl StoreWriteError {
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
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRecordStore: Send + Sync {
    /// Write `user` as one item in the configured table.
    async fn put(&self, user: &StoredUser) -> Result<(), StoreWriteError>;
}
