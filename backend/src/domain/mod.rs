//! Domain primitives, ports and the account creation use case.
//!
//! Purpose: keep the create-user flow free of HTTP, AWS and AMQP types so it
//! can be exercised with test doubles.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - UserProfile, NewUser, StoredUser, Password, PasswordHash: user records.
//! - UserCreatedEvent: event announced on the queue.
//! - SecretMap, StoreCredentials: startup credentials.
//! - UserCreationService, WriteOrder: the orchestrating use case.

pub mod credentials;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_creation;
pub mod user_events;

pub use self::credentials::{CredentialsError, SecretMap, StoreCredentials};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, Password, PasswordHash, StoredUser, UserProfile};
pub use self::user_creation::{ParseWriteOrderError, UserCreationService, WriteOrder};
pub use self::user_events::{UserCreatedEvent, UserEventType};
