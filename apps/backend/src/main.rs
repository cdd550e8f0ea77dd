use actix_web::{web, App, HttpServer};
use bowling_backend::config::server::ServerConfig;
use bowling_backend::middleware::cors::cors_middleware;
use bowling_backend::middleware::structured_logger::StructuredLogger;
use bowling_backend::middleware::trace_span::TraceSpan;
use bowling_backend::routes;
use bowling_backend::state::app_state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        cors_origins = ?config.cors_allowed_origins,
        "Starting bowling backend"
    );

    let data = web::Data::new(AppState::in_memory());
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
