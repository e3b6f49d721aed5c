//! Port for publishing user lifecycle events to the message broker.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::UserCreatedEvent;

/// Errors surfaced by event publisher adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// No broker channel was established at startup.
    #[error("event publisher is not connected to a broker")]
    NotConnected,
    /// The event could not be encoded.
    #[error("user event could not be encoded: {message}")]
    Encode { message: String },
    /// The broker refused or dropped the message.
    #[error("broker rejected the user event: {message}")]
    Broker { message: String },
}

impl PublishError {
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    pub fn broker(message: impl Into<String>) -> Self {
        Self::Broker {
            message: message.into(),
        }
    }
}

/// Sink for user lifecycle events.
///
/// Implementations hold a channel established once at startup and never
/// reconnect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserEventPublisher: Send + Sync {
    async fn publish(&self, event: &UserCreatedEvent) -> Result<(), PublishError>;
}
