//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **secrets**: serverless-function and secrets-store credential sources
//! - **persistence**: DynamoDB record store
//! - **queue**: AMQP event publisher
//! - **hashing**: bcrypt password hasher
//! - **aws**: SDK configuration shared by the AWS-backed adapters
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod aws;
pub mod hashing;
pub mod persistence;
pub mod queue;
pub mod secrets;
