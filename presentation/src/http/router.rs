//! Route table of the inquiry handler

use super::cors::{cors_middleware, preflight};
use super::handlers::{AppState, health, submit_inquiry};
use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

/// Build the router serving the inquiry endpoint at `path`.
pub fn router(state: AppState, path: &str) -> Router {
    Router::new()
        .route(path, post(submit_inquiry).options(preflight))
        .route("/health", get(health))
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}
