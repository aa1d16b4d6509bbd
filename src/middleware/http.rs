//! HTTP-level middleware (cross-cutting concerns).
//!
//! This module is for transport/infrastructure concerns that apply to every
//! route, including the fallback.
//!
//! Responsibility:
//! - Access logging / request tracing (TraceLayer)
//! - Body size limits
//!
//! Notes:
//! - No timeout or cancellation layer: the proxy inherits whatever the
//!   hosting runtime does for aborted clients and slow upstreams.
//! - Nothing in this stack may add response headers; a rejected request must
//!   go out as a bare 404.

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Apply HTTP-level middleware to the given Router.
pub fn apply(router: Router) -> Router {
    router
        // Nothing legitimate sends a request body to this service.
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        // Access log / tracing for all requests.
        .layer(TraceLayer::new_for_http())
}
