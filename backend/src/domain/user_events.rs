//! Domain events emitted by account creation.
//!
//! On the wire an event is the bare JSON object
//! `{"eventType":"UserCreated","data":{...}}` with no envelope, id or
//! timestamp; `data` carries the same values as the stored record, hash
//! included.

use serde::{Deserialize, Serialize};

use crate::domain::user::StoredUser;

/// Discriminator carried in the `eventType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserEventType {
    UserCreated,
}

/// Event published once a user record has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedEvent {
    event_type: UserEventType,
    data: StoredUser,
}

impl UserCreatedEvent {
    /// Announce `user`.
    pub fn new(user: StoredUser) -> Self {
        Self {
            event_type: UserEventType::UserCreated,
            data: user,
        }
    }

    pub fn event_type(&self) -> UserEventType {
        self.event_type
    }

    /// Record carried by the event.
    pub fn data(&self) -> &StoredUser {
        &self.data
    }

    /// Encode the event as the JSON byte payload placed on the queue.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
