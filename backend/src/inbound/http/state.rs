//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on the
//! driving port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CreateUserCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn CreateUserCommand>,
}

impl HttpState {
    pub fn new(users: Arc<dyn CreateUserCommand>) -> Self {
        Self { users }
    }
}
