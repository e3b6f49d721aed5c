//! Secret source adapters.
//!
//! Both adapters return the same flat mapping; configuration picks one at
//! startup.

mod lambda;
mod payload;
mod secrets_manager;

pub use lambda::LambdaSecretSource;
pub use secrets_manager::{CURRENT_VERSION_STAGE, SecretsManagerSecretSource};
