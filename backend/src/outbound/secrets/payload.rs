//! Decoding of secret payloads shared by every secret source.

use serde_json::{Map, Value};

use crate::domain::SecretMap;
use crate::domain::ports::SecretSourceError;

/// Decode `text` as a JSON object whose values are all strings.
pub(super) fn parse_secret_object(text: &str) -> Result<SecretMap, SecretSourceError> {
    let object: Map<String, Value> = serde_json::from_str(text).map_err(|err| {
        SecretSourceError::malformed(format!("secret is not a JSON object: {err}"))
    })?;

    object
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(text) => Ok((name, text)),
            _ => Err(SecretSourceError::malformed(format!(
                "secret `{name}` is not a string"
            ))),
        })
        .collect()
}
