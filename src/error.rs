/*
 * Responsibility
 * - app-wide AppError definition
 * - IntoResponse mapping (admission rejections / upstream failures)
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal admission rejection. Every failed precondition collapses to
    /// the same bare 404 so a probing client cannot tell which check failed.
    #[error("not found")]
    NotFound,

    /// The upstream fetch produced no response at all (connect/TLS failure).
    /// A non-2xx upstream response is NOT this case; it passes through with
    /// its own status.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "upstream fetch failed");
                StatusCode::BAD_GATEWAY.into_response()
            }
        }
    }
}
