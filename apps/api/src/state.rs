use std::sync::Arc;

use crate::pathway::generator::PathwayGenerator;
use crate::rate_limit::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Default: GeminiPathwayGenerator; tests swap in stubs.
    pub generator: Arc<dyn PathwayGenerator>,
    pub rate_limiter: Arc<RateLimiter>,
}
