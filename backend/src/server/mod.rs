//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{
    StartupError, bootstrap, bootstrap_with_source, build_http_state, build_secret_source,
    connect_publisher, load_store_credentials,
};

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready, root};
use crate::inbound::http::json::json_config;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::create_user;

/// Bare documentation path; redirects to [`SWAGGER_UI_ROOT`].
pub const API_DOCS_PATH: &str = "/api-docs";
/// Root of the Swagger UI.
pub const SWAGGER_UI_ROOT: &str = "/api-docs/";

/// Shared state handed to every worker's `App`.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Build the application with every route and middleware attached.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Cors::permissive())
        .wrap(Trace)
        .service(root)
        .service(create_user)
        .service(ready)
        .service(live)
        .service(web::redirect(API_DOCS_PATH, SWAGGER_UI_ROOT))
        .service(SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Bind the listener and mark the service ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
    };
    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(config.bind_addr())?
        .run();

    health_state.mark_ready();
    Ok(server)
}
