//! Service entry-point: loads settings, resolves credentials and adapters,
//! then serves the REST API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use create_user_service::inbound::http::health::HealthState;
use create_user_service::server::{ServerConfig, bootstrap, create_server};
use create_user_service::settings::ServiceSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let http_state = match bootstrap(&settings).await {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "startup failed; not starting HTTP listener");
            return Err(err.into());
        }
    };

    let config = ServerConfig::from_settings(&settings);
    let server = create_server(web::Data::new(HealthState::new()), http_state, &config)?;
    let (host, port) = config.bind_addr();
    info!(host, port, "create user service listening");
    server.await
}
