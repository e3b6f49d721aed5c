//! Account creation use case.
//!
//! Hashes the password, then performs the store write and the event publish in
//! the configured [`WriteOrder`]. The two writes are not transactional: when
//! the second step fails the first is not undone.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    CreateUserCommand, HashError, PasswordHasher, PublishError, StoreWriteError,
    UserEventPublisher, UserRecordStore,
};
use crate::domain::{Error, NewUser, StoredUser, UserCreatedEvent, UserProfile};

pub const HASH_FAILURE_MESSAGE: &str = "Error hashing password";
pub const STORE_FAILURE_MESSAGE: &str = "Error saving user to DynamoDB";
pub const PUBLISH_FAILURE_MESSAGE: &str = "Error publishing user event";

/// Relative order of the store write and the event publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteOrder {
    /// Write the record, then publish only if the write succeeded.
    #[default]
    PersistFirst,
    /// Publish the event, then write the record only if publishing succeeded.
    PublishFirst,
}

impl WriteOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PersistFirst => "persist-first",
            Self::PublishFirst => "publish-first",
        }
    }
}

impl fmt::Display for WriteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised [`WriteOrder`] text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown write order `{0}`; expected `persist-first` or `publish-first`")]
pub struct ParseWriteOrderError(String);

impl FromStr for WriteOrder {
    type Err = ParseWriteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "persist-first" => Ok(Self::PersistFirst),
            "publish-first" => Ok(Self::PublishFirst),
            other => Err(ParseWriteOrderError(other.to_owned())),
        }
    }
}

/// Account creation service implementing [`CreateUserCommand`].
#[derive(Clone)]
pub struct UserCreationService {
    hasher: Arc<dyn PasswordHasher>,
    publisher: Arc<dyn UserEventPublisher>,
    store: Arc<dyn UserRecordStore>,
    order: WriteOrder,
}

impl UserCreationService {
    /// Create a service over the given adapters.
    pub fn new(
        hasher: Arc<dyn PasswordHasher>,
        publisher: Arc<dyn UserEventPublisher>,
        store: Arc<dyn UserRecordStore>,
        order: WriteOrder,
    ) -> Self {
        Self {
            hasher,
            publisher,
            store,
            order,
        }
    }

    pub fn write_order(&self) -> WriteOrder {
        self.order
    }

    fn map_hash_error(error: &HashError) -> Error {
        Error::internal(HASH_FAILURE_MESSAGE).with_cause(error)
    }

    fn map_store_error(error: &StoreWriteError) -> Error {
        Error::internal(STORE_FAILURE_MESSAGE).with_cause(error)
    }

    fn map_publish_error(error: &PublishError) -> Error {
        Error::internal(PUBLISH_FAILURE_MESSAGE).with_cause(error)
    }

    async fn persist(&self, user: &StoredUser) -> Result<(), Error> {
        self.store.put(user).await.map_err(|err| {
            error!(error = %err, "error saving user to DynamoDB");
            Self::map_store_error(&err)
        })?;
        info!(username = ?user.profile().username, "user saved to store");
        Ok(())
    }

    async fn announce(&self, user: &StoredUser) -> Result<(), Error> {
        let event = UserCreatedEvent::new(user.clone());
        self.publisher.publish(&event).await.map_err(|err| {
            error!(error = %err, "error publishing user created event");
            Self::map_publish_error(&err)
        })?;
        info!(username = ?user.profile().username, "user created event published");
        Ok(())
    }
}

#[async_trait]
impl CreateUserCommand for UserCreationService {
    async fn create(&self, user: NewUser) -> Result<UserProfile, Error> {
        let NewUser { profile, password } = user;
        info!(username = ?profile.username, email = ?profile.email, "received request to create user");

        let hashed = match password {
            Some(password) => self.hasher.hash(&password).await,
            None => Err(HashError::MissingPassword),
        }
        .map_err(|err| {
            error!(error = %err, "error hashing password");
            Self::map_hash_error(&err)
        })?;
        debug!("password hashed");

        let stored = StoredUser::new(profile, hashed);
        match self.order {
            WriteOrder::PersistFirst => {
                self.persist(&stored).await?;
                self.announce(&stored).await?;
            }
            WriteOrder::PublishFirst => {
                self.announce(&stored).await?;
                self.persist(&stored).await?;
            }
        }

        Ok(stored.into_profile())
    }
}

#[cfg(test)]
#[path = "user_creation_tests.rs"]
mod tests;
