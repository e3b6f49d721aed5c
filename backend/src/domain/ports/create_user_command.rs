//! Driving port for account creation.
//!
//! Inbound adapters call this without knowing which store, broker or hasher
//! sits behind it, so handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, UserProfile};

/// Domain use-case port for creating a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateUserCommand: Send + Sync {
    /// Hash, persist and announce `user`, returning its public profile.
    async fn create(&self, user: NewUser) -> Result<UserProfile, Error>;
}
