//! Account creation HTTP handler.
//!
//! ```text
//! POST /users {"firstName":"A","lastName":"B","email":"a@b.com","username":"ab1","password":"secret"}
//! ```
//!
//! Every body field is optional and unvalidated. The response echoes the
//! profile fields that were supplied and never includes the password.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{NewUser, Password, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserProfileSchema};
use crate::inbound::http::state::HttpState;

/// Registration body accepted by `POST /users`.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(format = "password")]
    pub password: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            profile: UserProfile {
                first_name: value.first_name,
                last_name: value.last_name,
                email: value.email,
                username: value.username,
            },
            password: value.password.map(Password::new),
        }
    }
}

/// Register a user, store the hashed record and announce it on the queue.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserProfileSchema),
        (status = 400, description = "Body is not a JSON object", body = ErrorSchema),
        (status = 500, description = "Hashing, storing or publishing failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let profile = state.users.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(profile))
}
