#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    bowling_test_support::logging::init();
}

/// Build the full application (routes plus tracing middleware) around `$state`,
/// a `web::Data<AppState>`.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(bowling_backend::StructuredLogger)
                .wrap(bowling_backend::TraceSpan)
                .app_data($state.clone())
                .configure(bowling_backend::routes::configure),
        )
        .await
    };
}
pub(crate) use init_app;

pub fn fresh_state() -> actix_web::web::Data<bowling_backend::AppState> {
    actix_web::web::Data::new(bowling_backend::AppState::in_memory())
}

pub async fn json_body<B>(resp: ServiceResponse<B>) -> Value
where
    B: actix_web::body::MessageBody,
{
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "response body is not JSON: {}",
            String::from_utf8_lossy(&body)
        )
    })
}

pub fn boxed<B>(resp: ServiceResponse<B>) -> ServiceResponse<BoxBody>
where
    B: actix_web::body::MessageBody + 'static,
{
    resp.map_into_boxed_body()
}
