/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - Clone cheap: allowlist behind Arc, upstream handle is a pooled client
 */
use std::sync::Arc;

use crate::config::Config;
use crate::services::origin::Allowlist;
use crate::services::upstream::Upstream;

#[derive(Clone, Debug)]
pub struct AppState {
    pub allowlist: Arc<Allowlist>,
    pub upstream: Upstream,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            allowlist: Arc::new(Allowlist::new(config.allowed_origins.clone())),
            upstream: Upstream::new(),
        }
    }
}
