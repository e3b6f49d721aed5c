//! Create-user service library.
//!
//! `POST /users` hashes the password, writes the record to DynamoDB and
//! announces a `UserCreated` event on an AMQP queue. The binary in
//! `main.rs` wires the adapters; everything else lives here so integration
//! tests can build the same app.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
