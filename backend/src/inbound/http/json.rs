//! JSON extractor configuration.
//!
//! Bodies that fail to decode become `invalid_request` errors in the usual
//! envelope instead of actix's plain-text default.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use tracing::warn;

use crate::domain::Error;

/// Message returned when a body cannot be decoded.
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object";

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "rejected request body");
    Error::invalid_request(INVALID_BODY_MESSAGE)
        .with_cause(err)
        .into()
}

/// Extractor configuration applied to every JSON endpoint.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}
