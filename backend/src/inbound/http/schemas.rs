//! OpenAPI schema wrappers for domain types.
//!
//! The domain never derives `ToSchema`; these mirror the serialised shapes
//! and register them under the domain type paths.

use utoipa::ToSchema;

/// Machine-readable error category.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error envelope returned by every failing endpoint.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "internal_error")]
    code: ErrorCodeSchema,
    #[schema(example = "Error saving user to DynamoDB")]
    message: String,
    /// Rendered underlying failure.
    #[schema(example = "user store is unavailable: dispatch failure")]
    error: Option<String>,
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// Public profile echoed after a successful registration.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserProfile)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserProfileSchema {
    #[schema(rename = "firstName", example = "Ada")]
    first_name: Option<String>,
    #[schema(rename = "lastName", example = "Lovelace")]
    last_name: Option<String>,
    #[schema(example = "ada@example.com")]
    email: Option<String>,
    #[schema(example = "ada")]
    username: Option<String>,
}
