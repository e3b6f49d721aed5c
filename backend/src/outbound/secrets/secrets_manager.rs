//! Secret source backed by a managed secrets store.

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, SdkError};
use tracing::{debug, error};

use super::payload::parse_secret_object;
use crate::domain::SecretMap;
use crate::domain::ports::{SecretSource, SecretSourceError};

/// Version stage selecting the live value of a secret.
pub const CURRENT_VERSION_STAGE: &str = "AWSCURRENT";

/// Fetches the current version of a named secret.
#[derive(Clone)]
pub struct SecretsManagerSecretSource {
    client: Client,
    secret_name: String,
}

impl SecretsManagerSecretSource {
    pub fn new(client: Client, secret_name: impl Into<String>) -> Self {
        Self {
            client,
            secret_name: secret_name.into(),
        }
    }
}

#[async_trait]
impl SecretSource for SecretsManagerSecretSource {
    async fn fetch(&self) -> Result<SecretMap, SecretSourceError> {
        debug!(secret = %self.secret_name, "reading secret");
        let response = self
            .client
            .get_secret_value()
            .secret_id(&self.secret_name)
            .version_stage(CURRENT_VERSION_STAGE)
            .send()
            .await
            .map_err(|err| {
                error!(
                    secret = %self.secret_name,
                    error = %DisplayErrorContext(&err),
                    "error reading secret"
                );
                let message = DisplayErrorContext(&err).to_string();
                match err {
                    SdkError::ServiceError(_) => SecretSourceError::rejected(message),
                    _ => SecretSourceError::unavailable(message),
                }
            })?;

        let text = response
            .secret_string()
            .ok_or_else(|| SecretSourceError::malformed("secret has no string value"))?;
        parse_secret_object(text)
    }
}
