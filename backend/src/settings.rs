//! Service configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USER_SERVICE_*` environment variables over an
//! optional config file. Every key is optional; the accessors supply defaults.

use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{ParseWriteOrderError, WriteOrder};
use crate::outbound::hashing::DEFAULT_BCRYPT_COST;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8082;
const DEFAULT_REGION: &str = "us-east-2";
const DEFAULT_TABLE_NAME: &str = "Users";
const DEFAULT_AMQP_ADDR: &str = "amqp://127.0.0.1:5672/%2f";
const DEFAULT_QUEUE_NAME: &str = "user-events";
const DEFAULT_LAMBDA_FUNCTION: &str = "fetchSecretsFunction";
const DEFAULT_SECRET_NAME: &str = "create-user-service/store-credentials";

/// Mechanism used to fetch the store credentials at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecretSourceKind {
    /// Invoke a serverless function that returns the secret.
    #[default]
    Lambda,
    /// Read the current version of a managed secret.
    SecretsManager,
}

impl FromStr for SecretSourceKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lambda" => Ok(Self::Lambda),
            "secrets-manager" => Ok(Self::SecretsManager),
            other => Err(SettingsError::UnknownSecretSource(other.to_owned())),
        }
    }
}

/// A configured value could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown secret source `{0}`; expected `lambda` or `secrets-manager`")]
    UnknownSecretSource(String),
    #[error(transparent)]
    WriteOrder(#[from] ParseWriteOrderError),
}

/// Configuration for the create-user service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServiceSettings {
    /// Interface the HTTP listener binds to.
    pub host: Option<String>,
    /// Port the HTTP listener binds to.
    #[ortho_config(default = 8082)]
    pub port: u16,
    /// AWS region for the record store and secret sources.
    pub region: Option<String>,
    /// DynamoDB table receiving user records.
    pub table_name: Option<String>,
    /// AMQP broker URI.
    pub amqp_addr: Option<String>,
    /// Durable queue receiving user events.
    pub queue_name: Option<String>,
    /// `lambda` or `secrets-manager`.
    pub secret_source: Option<String>,
    /// Function invoked by the `lambda` secret source.
    pub lambda_function: Option<String>,
    /// Secret read by the `secrets-manager` secret source.
    pub secret_name: Option<String>,
    /// `persist-first` or `publish-first`.
    pub write_order: Option<String>,
    /// bcrypt work factor.
    pub bcrypt_cost: Option<u32>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            region: None,
            table_name: None,
            amqp_addr: None,
            queue_name: None,
            secret_source: None,
            lambda_function: None,
            secret_name: None,
            write_order: None,
            bcrypt_cost: None,
        }
    }
}

impl ServiceSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or(DEFAULT_TABLE_NAME)
    }

    pub fn amqp_addr(&self) -> &str {
        self.amqp_addr.as_deref().unwrap_or(DEFAULT_AMQP_ADDR)
    }

    pub fn queue_name(&self) -> &str {
        self.queue_name.as_deref().unwrap_or(DEFAULT_QUEUE_NAME)
    }

    pub fn lambda_function(&self) -> &str {
        self.lambda_function
            .as_deref()
            .unwrap_or(DEFAULT_LAMBDA_FUNCTION)
    }

    pub fn secret_name(&self) -> &str {
        self.secret_name.as_deref().unwrap_or(DEFAULT_SECRET_NAME)
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST)
    }

    /// Parse the configured secret source, defaulting to [`SecretSourceKind::Lambda`].
    pub fn secret_source(&self) -> Result<SecretSourceKind, SettingsError> {
        self.secret_source
            .as_deref()
            .map_or(Ok(SecretSourceKind::default()), str::parse)
    }

    /// Parse the configured write order, defaulting to persist-first.
    pub fn write_order(&self) -> Result<WriteOrder, SettingsError> {
        Ok(self
            .write_order
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default())
    }
}
