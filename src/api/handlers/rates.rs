/*
 * Responsibility
 * - GET /numbat/ecb-exchange-rates: admission gate → upstream fetch → shaping
 * - fallback handler for every other path
 * - per-request logging: one "request received" line, then allowed/not-allowed
 */
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{error::AppError, state::AppState};

/// The only path this proxy serves.
pub const EXCHANGE_RATES_PATH: &str = "/numbat/ecb-exchange-rates";

/// Single entry point for the fixed endpoint. All preconditions must hold
/// before any upstream work happens:
/// - method is GET
/// - an Origin header is present
/// - the URI carries no query component at all (a bare trailing `?` counts)
/// - the origin is allowlisted or resolves to localhost
///
/// Every failure collapses to the same bare 404.
pub async fn exchange_rates(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let origin = req.headers().get(header::ORIGIN).cloned();
    log_received(origin.as_ref());

    let Some(origin) = origin else {
        return Err(deny("<missing>"));
    };
    let shown = origin.to_str().unwrap_or("<opaque>");

    if req.method() != Method::GET {
        return Err(deny(shown));
    }
    if req.uri().query().is_some() {
        return Err(deny(shown));
    }
    let allowed = match origin.to_str() {
        Ok(value) => state.allowlist.permits(value),
        Err(_) => {
            // Origin bytes that are not even visible ASCII; nothing a real
            // browser sends.
            warn!("received unreadable origin header");
            false
        }
    };
    if !allowed {
        return Err(deny(shown));
    }
    info!(origin = shown, "origin allowed");

    let upstream = state.upstream.get_daily_rates().await?;
    Ok(shape_response(origin, upstream))
}

/// Fallback for every path other than the fixed endpoint. Indistinguishable
/// from any other admission failure, and logged the same way.
pub async fn unmatched(req: Request) -> AppError {
    let origin = req.headers().get(header::ORIGIN).cloned();
    log_received(origin.as_ref());
    deny(
        origin
            .as_ref()
            .and_then(|v| v.to_str().ok())
            .unwrap_or("<missing>"),
    )
}

/// Exactly two headers go out: a fixed XML content type and the caller's own
/// origin reflected back (never a wildcard). Upstream status and body pass
/// through untouched; all other upstream headers are dropped.
fn shape_response(origin: HeaderValue, upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/xml"),
        ),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, origin),
    ];
    (status, headers, Body::from_stream(upstream.bytes_stream())).into_response()
}

fn log_received(origin: Option<&HeaderValue>) {
    let origin = origin.and_then(|v| v.to_str().ok()).unwrap_or("<missing>");
    info!(origin, "request received");
}

fn deny(origin: &str) -> AppError {
    info!(origin, "origin not allowed");
    AppError::NotFound
}
