//! In-memory adapters for tests.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration suites under `tests/`. They implement the same ports as the
//! production adapters so the full actix app can be built without AWS or a
//! broker.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{
    PublishError, SecretSource, SecretSourceError, StoreWriteError, UserEventPublisher,
    UserRecordStore,
};
use crate::domain::{SecretMap, StoredUser, UserCreatedEvent};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record store keeping every written item in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserRecordStore {
    items: Mutex<Vec<StoredUser>>,
    failure: Option<StoreWriteError>,
}

impl InMemoryUserRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every write with `error`.
    pub fn failing(error: StoreWriteError) -> Self {
        Self {
            items: Mutex::default(),
            failure: Some(error),
        }
    }

    /// Snapshot of the items written so far.
    pub fn items(&self) -> Vec<StoredUser> {
        lock(&self.items).clone()
    }
}

#[async_trait]
impl UserRecordStore for InMemoryUserRecordStore {
    async fn put(&self, user: &StoredUser) -> Result<(), StoreWriteError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        lock(&self.items).push(user.clone());
        Ok(())
    }
}

/// Publisher capturing the exact bytes that would be sent to the queue.
#[derive(Debug, Default)]
pub struct RecordingUserEventPublisher {
    payloads: Mutex<Vec<Vec<u8>>>,
}

impl RecordingUserEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> Vec<Vec<u8>> {
        lock(&self.payloads).clone()
    }

    /// Published payloads decoded as JSON; undecodable payloads become `Null`.
    pub fn messages(&self) -> Vec<Value> {
        self.payloads()
            .iter()
            .map(|bytes| serde_json::from_slice(bytes).unwrap_or(Value::Null))
            .collect()
    }
}

#[async_trait]
impl UserEventPublisher for RecordingUserEventPublisher {
    async fn publish(&self, event: &UserCreatedEvent) -> Result<(), PublishError> {
        let payload = event
            .to_bytes()
            .map_err(|err| PublishError::encode(err.to_string()))?;
        lock(&self.payloads).push(payload);
        Ok(())
    }
}

/// Secret source answering with a fixed result.
#[derive(Debug, Clone)]
pub struct StaticSecretSource {
    result: Result<SecretMap, SecretSourceError>,
}

impl StaticSecretSource {
    pub fn new(secrets: SecretMap) -> Self {
        Self {
            result: Ok(secrets),
        }
    }

    pub fn failing(error: SecretSourceError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl SecretSource for StaticSecretSource {
    async fn fetch(&self) -> Result<SecretMap, SecretSourceError> {
        self.result.clone()
    }
}
