//! Per-request tracing.

use std::net::SocketAddr;
use std::time::Instant;

use tracing::{Span, info, info_span};

/// Span wrapping one request from routing to response.
pub(crate) fn request_span(method: &http::Method, path: &str, peer: SocketAddr) -> Span {
    info_span!("request", %method, path, %peer)
}

/// Emits the completion event inside the current request span.
pub(crate) fn finished(status: http::StatusCode, started: Instant) {
    let latency_us = started.elapsed().as_micros() as u64;
    info!(status = status.as_u16(), latency_us, "request finished");
}
