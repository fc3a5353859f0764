pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::pathway::handlers;
use crate::rate_limit::rate_limit;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation is the only route that costs an upstream call
        .route(
            "/api/generate-pathway",
            post(handlers::handle_generate_pathway).route_layer(
                middleware::from_fn_with_state(state.clone(), rate_limit),
            ),
        )
        .route("/api/catalog/resolve", get(handlers::handle_resolve))
        .with_state(state)
}
