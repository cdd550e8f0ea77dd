pub mod cors;
pub mod structured_logger;
pub mod trace_span;

pub use cors::cors_middleware;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
