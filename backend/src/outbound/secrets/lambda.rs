//! Secret source backed by a serverless function invocation.
//!
//! The function answers with a JSON document shaped like an HTTP proxy
//! response: `{"statusCode":200,"body":"{\"secret\":\"{...}\"}"}`. Both `body`
//! and `secret` are JSON encoded strings. A top-level `errorMessage` means the
//! function itself failed.

use async_trait::async_trait;
use aws_sdk_lambda::Client;
use aws_sdk_lambda::error::DisplayErrorContext;
use serde::Deserialize;
use tracing::{debug, error};

use super::payload::parse_secret_object;
use crate::domain::SecretMap;
use crate::domain::ports::{SecretSource, SecretSourceError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvocationPayload {
    error_message: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InvocationBody {
    secret: String,
}

/// Fetches secrets by invoking a named function.
#[derive(Clone)]
pub struct LambdaSecretSource {
    client: Client,
    function_name: String,
}

impl LambdaSecretSource {
    pub fn new(client: Client, function_name: impl Into<String>) -> Self {
        Self {
            client,
            function_name: function_name.into(),
        }
    }
}

#[async_trait]
impl SecretSource for LambdaSecretSource {
    async fn fetch(&self) -> Result<SecretMap, SecretSourceError> {
        debug!(function = %self.function_name, "invoking secret function");
        let response = self
            .client
            .invoke()
            .function_name(&self.function_name)
            .send()
            .await
            .map_err(|err| {
                error!(
                    function = %self.function_name,
                    error = %DisplayErrorContext(&err),
                    "error invoking secret function"
                );
                SecretSourceError::unavailable(DisplayErrorContext(&err).to_string())
            })?;

        let payload = response
            .payload()
            .ok_or_else(|| SecretSourceError::malformed("function returned no payload"))?;
        decode_invocation_payload(payload.as_ref())
    }
}

/// Unwrap the nested invocation envelope into the secret mapping.
fn decode_invocation_payload(bytes: &[u8]) -> Result<SecretMap, SecretSourceError> {
    let payload: InvocationPayload = serde_json::from_slice(bytes).map_err(|err| {
        SecretSourceError::malformed(format!("invocation payload is not JSON: {err}"))
    })?;
    if let Some(message) = payload.error_message {
        return Err(SecretSourceError::rejected(message));
    }

    let body = payload
        .body
        .ok_or_else(|| SecretSourceError::malformed("invocation payload has no body"))?;
    let body: InvocationBody = serde_json::from_str(&body).map_err(|err| {
        SecretSourceError::malformed(format!("invocation body has no secret: {err}"))
    })?;
    parse_secret_object(&body.secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn envelope(secret: &serde_json::Value) -> Vec<u8> {
        let body = json!({ "secret": secret.to_string() }).to_string();
        json!({ "statusCode": 200, "body": body }).to_string().into_bytes()
    }

    #[rstest]
    fn unwraps_double_encoded_secret() {
        let bytes = envelope(&json!({
            "AWS_ACCESS_KEY_ID": "AKID",
            "AWS_SECRET_ACCESS_KEY": "SECRET",
        }));
        let map = decode_invocation_payload(&bytes).expect("valid envelope");
        assert_eq!(map.get("AWS_ACCESS_KEY_ID"), Some("AKID"));
        assert_eq!(map.get("AWS_SECRET_ACCESS_KEY"), Some("SECRET"));
    }

    #[rstest]
    fn error_message_is_a_rejection() {
        let bytes = json!({
            "errorType": "AccessDeniedException",
            "errorMessage": "not authorised to read secret",
        })
        .to_string();
        let err = decode_invocation_payload(bytes.as_bytes()).expect_err("function failed");
        assert_eq!(
            err,
            SecretSourceError::rejected("not authorised to read secret")
        );
    }

    #[rstest]
    #[case(json!({ "statusCode": 200 }))]
    #[case(json!({ "statusCode": 200, "body": "{}" }))]
    #[case(json!({ "statusCode": 200, "body": "{\"secret\":\"nope\"}" }))]
    fn incomplete_envelopes_are_malformed(#[case] payload: serde_json::Value) {
        let err = decode_invocation_payload(payload.to_string().as_bytes())
            .expect_err("incomplete envelope");
        assert!(matches!(err, SecretSourceError::Malformed { .. }));
    }
}
