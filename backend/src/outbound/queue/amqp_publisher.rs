//! AMQP-backed `UserEventPublisher`.
//!
//! One connection and one channel are opened at startup and reused for the
//! life of the process. Events go to the default exchange with the queue name
//! as routing key. There is no reconnect: once the channel drops, every
//! publish fails.

use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::UserCreatedEvent;
use crate::domain::ports::{PublishError, UserEventPublisher};

/// Failures while establishing the broker channel.
#[derive(Debug, Error)]
pub enum AmqpConnectError {
    #[error("failed to connect to broker: {0}")]
    Connect(#[source] lapin::Error),
    #[error("failed to open broker channel: {0}")]
    Channel(#[source] lapin::Error),
    #[error("failed to declare queue `{queue}`: {source}")]
    Declare {
        queue: String,
        #[source]
        source: lapin::Error,
    },
}

/// Publisher holding the broker connection opened at startup.
pub struct AmqpUserEventPublisher {
    // Held so the connection lives as long as the channel.
    _connection: Connection,
    channel: Channel,
    queue: String,
}

impl AmqpUserEventPublisher {
    /// Connect to `addr`, open a channel and declare `queue` as durable.
    ///
    /// Re-declaring an existing durable queue with the same properties is a
    /// no-op at the broker.
    pub async fn connect(addr: &str, queue: &str) -> Result<Self, AmqpConnectError> {
        let connection = Connection::connect(addr, ConnectionProperties::default())
            .await
            .map_err(AmqpConnectError::Connect)?;
        let channel = connection
            .create_channel()
            .await
            .map_err(AmqpConnectError::Channel)?;
        channel
            .queue_declare(
                queue,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|source| AmqpConnectError::Declare {
                queue: queue.to_owned(),
                source,
            })?;
        info!(queue, "connected to broker");

        Ok(Self {
            _connection: connection,
            channel,
            queue: queue.to_owned(),
        })
    }

    pub fn queue(&self) -> &str {
        self.queue.as_str()
    }
}

#[async_trait]
impl UserEventPublisher for AmqpUserEventPublisher {
    async fn publish(&self, event: &UserCreatedEvent) -> Result<(), PublishError> {
        let payload = event
            .to_bytes()
            .map_err(|err| PublishError::encode(err.to_string()))?;
        let confirmation = self
            .channel
            .basic_publish(
                "",
                &self.queue,
                BasicPublishOptions::default(),
                &payload,
                BasicProperties::default(),
            )
            .await
            .map_err(|err| PublishError::broker(err.to_string()))?
            .await
            .map_err(|err| PublishError::broker(err.to_string()))?;
        if confirmation.is_nack() {
            return Err(PublishError::broker("message was negatively acknowledged"));
        }
        debug!(queue = %self.queue, bytes = payload.len(), "user event sent");
        Ok(())
    }
}

/// Stand-in used when the broker could not be reached at startup.
///
/// Every publish fails with [`PublishError::NotConnected`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedUserEventPublisher;

#[async_trait]
impl UserEventPublisher for DisconnectedUserEventPublisher {
    async fn publish(&self, _event: &UserCreatedEvent) -> Result<(), PublishError> {
        warn!("user event dropped: no broker channel");
        Err(PublishError::NotConnected)
    }
}
