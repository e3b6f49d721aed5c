//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (secret stores, the record store, the broker, the hasher). Each trait
//! exposes strongly typed errors so adapters map their failures into
//! predictable variants.

mod create_user_command;
mod password_hasher;
mod secret_source;
mod user_event_publisher;
mod user_record_store;

pub use create_user_command::CreateUserCommand;
#[cfg(test)]
pub use create_user_command::MockCreateUserCommand;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{HashError, PasswordHasher};
#[cfg(test)]
pub use secret_source::MockSecretSource;
pub use secret_source::{SecretSource, SecretSourceError};
#[cfg(test)]
pub use user_event_publisher::MockUserEventPublisher;
pub use user_event_publisher::{PublishError, UserEventPublisher};
#[cfg(test)]
pub use user_record_store::MockUserRecordStore;
pub use user_record_store::{StoreWriteError, UserRecordStore};
