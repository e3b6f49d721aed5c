//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers return it
//! directly. Bodies are the serialised [`Error`], so a failed create renders
//! as `{"code":..,"message":..,"error":..,"traceId":..}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
        assert_eq!(ResponseError::status_code(&err), status);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_keep_message_and_cause() {
        let err = Error::internal("Error saving user to DynamoDB")
            .with_cause("user store rejected the write: ResourceNotFoundException")
            .with_trace_id(TRACE_ID);
        let response = ResponseError::error_response(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        assert_eq!(header, Some(TRACE_ID));

        let bytes = to_bytes(response.into_body()).await.expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("JSON body");
        assert_eq!(body["message"], "Error saving user to DynamoDB");
        assert_eq!(
            body["error"],
            "user store rejected the write: ResourceNotFoundException"
        );
        assert_eq!(body["traceId"], TRACE_ID);
    }

    #[rstest]
    #[actix_web::test]
    async fn responses_without_trace_id_omit_the_header() {
        let response = ResponseError::error_response(&Error::invalid_request("bad"));
        assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    }
}
