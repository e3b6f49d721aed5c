//! OpenAPI document for the REST API.
//!
//! Registers the create-user and health paths together with the schema
//! wrappers from [`crate::inbound::http::schemas`]. Served at
//! `/api-docs/openapi.json` with Swagger UI under `/api-docs/`, and exported
//! by `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserProfileSchema};
use crate::inbound::http::users::CreateUserRequest;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Create User Service API",
        description = "Registers users, stores them with a hashed password and announces each creation on a queue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserRequest,
        UserProfileSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "health", description = "Liveness and readiness checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const PROFILE_SCHEMA_NAME: &str = "crate.domain.UserProfile";

    fn object_fields(schema: &RefOr<Schema>) -> Vec<String> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn documents_the_create_user_path() {
        let doc = ApiDoc::openapi();
        let path = doc.paths.paths.get("/users").expect("/users path");
        assert!(path.post.is_some());
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
    }

    #[test]
    fn request_schema_accepts_password_but_profile_never_returns_it() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let request = object_fields(schemas.get("CreateUserRequest").expect("request schema"));
        assert!(request.iter().any(|field| field == "password"));
        assert!(request.iter().any(|field| field == "firstName"));

        let profile = object_fields(schemas.get(PROFILE_SCHEMA_NAME).expect("profile schema"));
        assert!(!profile.iter().any(|field| field == "password"));
    }
}
