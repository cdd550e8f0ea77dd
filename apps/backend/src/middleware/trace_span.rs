//! Request id assignment, per-request span and trace context.
//!
//! Every request gets a trace id: the caller's `x-request-id` when it looks
//! like an id we could have issued, otherwise a fresh UUID v4. The id is
//! recorded on a `request` span, made visible through [`crate::trace_ctx`]
//! for error bodies and the access log, and echoed back as `x-request-id`.
//!
//! Wrap it outermost so every other layer runs inside the span:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(TraceSpan)

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_INBOUND_ID_LEN: usize = 64;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = inbound_request_id(req.headers().get(&REQUEST_ID_HEADER))
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );

        let fut = self.service.call(req);
        let header_value = HeaderValue::from_str(&trace_id).ok();

        Box::pin(trace_ctx::with_trace_id(
            trace_id,
            async move {
                let mut res = fut.await?;
                if let Some(value) = header_value {
                    res.headers_mut().insert(REQUEST_ID_HEADER, value);
                }
                Ok(res)
            }
            .instrument(span),
        ))
    }
}

/// Reuse a caller-supplied id only if it is short and limited to
/// alphanumerics and `-`, so it is safe in logs and headers.
fn inbound_request_id(value: Option<&HeaderValue>) -> Option<String> {
    let id = value?.to_str().ok()?.trim();
    let acceptable = !id.is_empty()
        && id.len() <= MAX_INBOUND_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    acceptable.then(|| id.to_string())
}
