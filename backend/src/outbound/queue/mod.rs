//! Message broker adapters for user lifecycle events.

mod amqp_publisher;

pub use amqp_publisher::{
    AmqpConnectError, AmqpUserEventPublisher, DisconnectedUserEventPublisher,
};
