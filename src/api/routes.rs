/*
 * Responsibility
 * - URL structure: the single fixed endpoint + catch-all fallback
 * - method filtering happens inside the gate, so a non-GET on the fixed
 *   path is a plain 404, never a 405
 */
use axum::{Router, routing::any};

use crate::api::handlers::rates;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(rates::EXCHANGE_RATES_PATH, any(rates::exchange_rates))
        .fallback(rates::unmatched)
}
