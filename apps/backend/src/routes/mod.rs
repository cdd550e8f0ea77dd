use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. `main.rs` and the integration tests share this so
/// both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game routes: /api/game/**
    cfg.service(web::scope("/api/game").configure(games::configure_routes));
}
