//! Startup wiring from settings to the HTTP state.
//!
//! Runs once before the listener binds: fetch credentials, build the store
//! client, connect the publisher, assemble the use case. A secret failure
//! aborts startup; a broker failure degrades to a publisher that always
//! errors.

use std::sync::Arc;

use actix_web::web;
use aws_config::SdkConfig;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::ports::{
    PasswordHasher, SecretSource, SecretSourceError, UserEventPublisher, UserRecordStore,
};
use crate::domain::{CredentialsError, StoreCredentials, UserCreationService, WriteOrder};
use crate::inbound::http::state::HttpState;
use crate::outbound::aws::{dynamodb_client, load_sdk_config};
use crate::outbound::hashing::BcryptPasswordHasher;
use crate::outbound::persistence::DynamoDbUserRecordStore;
use crate::outbound::queue::{AmqpUserEventPublisher, DisconnectedUserEventPublisher};
use crate::outbound::secrets::{LambdaSecretSource, SecretsManagerSecretSource};
use crate::settings::{SecretSourceKind, ServiceSettings, SettingsError};

/// Reasons the service refuses to start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Settings(#[from] SettingsError),
    #[error("failed to fetch store credentials: {0}")]
    Secrets(#[from] SecretSourceError),
    #[error("store credentials are unusable: {0}")]
    Credentials(#[from] CredentialsError),
}

impl From<StartupError> for std::io::Error {
    fn from(value: StartupError) -> Self {
        Self::other(value)
    }
}

/// Build the configured secret source over the ambient AWS configuration.
pub fn build_secret_source(
    kind: SecretSourceKind,
    settings: &ServiceSettings,
    sdk_config: &SdkConfig,
) -> Box<dyn SecretSource> {
    match kind {
        SecretSourceKind::Lambda => Box::new(LambdaSecretSource::new(
            aws_sdk_lambda::Client::new(sdk_config),
            settings.lambda_function(),
        )),
        SecretSourceKind::SecretsManager => Box::new(SecretsManagerSecretSource::new(
            aws_sdk_secretsmanager::Client::new(sdk_config),
            settings.secret_name(),
        )),
    }
}

/// Fetch the secret mapping once and recover the store key pair from it.
pub async fn load_store_credentials(
    source: &dyn SecretSource,
) -> Result<StoreCredentials, StartupError> {
    let secrets = source.fetch().await.inspect_err(|err| {
        error!(error = %err, "error fetching secrets");
    })?;
    let credentials = StoreCredentials::from_secrets(&secrets).inspect_err(|err| {
        error!(error = %err, "secret mapping lacks store credentials");
    })?;
    info!(entries = secrets.len(), "store credentials loaded");
    Ok(credentials)
}

/// Connect to the broker, falling back to a disconnected publisher.
pub async fn connect_publisher(addr: &str, queue: &str) -> Arc<dyn UserEventPublisher> {
    match AmqpUserEventPublisher::connect(addr, queue).await {
        Ok(publisher) => Arc::new(publisher),
        Err(err) => {
            error!(error = %err, queue, "error connecting to broker; user events will fail");
            Arc::new(DisconnectedUserEventPublisher)
        }
    }
}

/// Assemble the handler state around the account creation use case.
pub fn build_http_state(
    hasher: Arc<dyn PasswordHasher>,
    publisher: Arc<dyn UserEventPublisher>,
    store: Arc<dyn UserRecordStore>,
    order: WriteOrder,
) -> web::Data<HttpState> {
    let service = UserCreationService::new(hasher, publisher, store, order);
    web::Data::new(HttpState::new(Arc::new(service)))
}

/// Resolve every dependency named by `settings`.
///
/// # Errors
/// Returns [`StartupError`] when the settings are invalid or the store
/// credentials cannot be obtained.
pub async fn bootstrap(settings: &ServiceSettings) -> Result<web::Data<HttpState>, StartupError> {
    let secret_kind = settings.secret_source()?;

    let sdk_config = load_sdk_config(settings.region()).await;
    let source = build_secret_source(secret_kind, settings, &sdk_config);
    bootstrap_with_source(settings, &sdk_config, source.as_ref()).await
}

/// Resolve the remaining dependencies once a secret source has been chosen.
///
/// # Errors
/// Returns [`StartupError`] when the write order is invalid or the store
/// credentials cannot be obtained from `source`.
pub async fn bootstrap_with_source(
    settings: &ServiceSettings,
    sdk_config: &SdkConfig,
    source: &dyn SecretSource,
) -> Result<web::Data<HttpState>, StartupError> {
    let order = settings.write_order()?;
    let credentials = load_store_credentials(source).await?;

    let store = DynamoDbUserRecordStore::new(
        dynamodb_client(sdk_config, &credentials),
        settings.table_name(),
    );
    info!(table = %store.table_name(), region = %settings.region(), "record store configured");
    let publisher = connect_publisher(settings.amqp_addr(), settings.queue_name()).await;
    let hasher = BcryptPasswordHasher::new(settings.bcrypt_cost());

    Ok(build_http_state(
        Arc::new(hasher),
        publisher,
        Arc::new(store),
        order,
    ))
}
