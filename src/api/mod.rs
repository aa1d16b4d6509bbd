/*
 * Responsibility
 * - public surface of the HTTP API (re-export routes())
 */
pub mod handlers;
mod routes;

pub use routes::routes;
