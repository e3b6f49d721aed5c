//! Shared AWS client configuration.
//!
//! Secret sources use the ambient credential chain. The record store uses the
//! key pair recovered from the secret source.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::config::Credentials;

use crate::domain::StoreCredentials;

/// Provider name reported by the SDK for store credentials.
const STORE_CREDENTIALS_PROVIDER: &str = "secret-source";

/// Load SDK configuration for `region` from the ambient environment.
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_owned()))
        .load()
        .await
}

/// Build a DynamoDB client that authenticates with `credentials`.
pub fn dynamodb_client(
    sdk_config: &SdkConfig,
    credentials: &StoreCredentials,
) -> aws_sdk_dynamodb::Client {
    let provider = Credentials::new(
        credentials.access_key_id(),
        credentials.secret_access_key(),
        None,
        None,
        STORE_CREDENTIALS_PROVIDER,
    );
    let config = aws_sdk_dynamodb::config::Builder::from(sdk_config)
        .credentials_provider(provider)
        .build();
    aws_sdk_dynamodb::Client::from_conf(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SecretMap;

    #[tokio::test]
    async fn store_client_uses_configured_region() {
        let sdk_config = load_sdk_config("us-east-2").await;
        let secrets: SecretMap = [
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
        ]
        .into_iter()
        .collect();
        let credentials = StoreCredentials::from_secrets(&secrets).expect("valid secrets");
        let client = dynamodb_client(&sdk_config, &credentials);
        assert_eq!(
            client.config().region().map(|region| region.as_ref()),
            Some("us-east-2")
        );
    }
}
