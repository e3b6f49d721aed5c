//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod json;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
