//! Access log: one `request_completed` event per request.
//!
//! Events carry the matched route pattern (`/api/game/{game_id}/roll`) rather
//! than the raw path so they group per endpoint, plus the game id when the
//! route has one. Level follows the status class.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::trace_ctx;

/// Route label for requests that matched no registered resource.
const UNMATCHED_ROUTE: &str = "unmatched";

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What the access log says about one finished request.
struct Completed {
    method: String,
    route: String,
    game_id: Option<String>,
    status: StatusCode,
}

impl Completed {
    fn from_request(req: &HttpRequest, status: StatusCode) -> Self {
        Self {
            method: req.method().to_string(),
            route: req
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED_ROUTE.to_string()),
            game_id: req.match_info().get("game_id").map(str::to_owned),
            status,
        }
    }

    fn log(&self, duration_us: u64) {
        let trace_id = trace_ctx::trace_id();
        let game_id = self.game_id.as_deref().unwrap_or("-");
        let status_code = self.status.as_u16();

        if self.status.is_server_error() {
            error!(http.method = %self.method, http.route = %self.route, game_id, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = %self.method, http.route = %self.route, game_id, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else {
            info!(http.method = %self.method, http.route = %self.route, game_id, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        // Routing fills match_info later; keep a handle for the error path.
        let http_req = req.request().clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let completed = match &result {
                Ok(res) => Completed::from_request(res.request(), res.status()),
                Err(err) => {
                    Completed::from_request(&http_req, err.as_response_error().status_code())
                }
            };
            completed.log(start.elapsed().as_micros() as u64);

            result
        })
    }
}
