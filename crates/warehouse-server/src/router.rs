//! Router assembly for the warehouse HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::index::health))
        .route(
            "/warehouses",
            get(handlers::warehouses::list_warehouses)
                .post(handlers::warehouses::create_warehouse),
        )
        .route(
            "/warehouses/{id}",
            delete(handlers::warehouses::delete_warehouse),
        )
        .route(
            "/warehouses/{id}/free-capacity",
            get(handlers::warehouses::free_capacity),
        )
        .route("/warehouses/{id}/add", post(handlers::warehouses::add))
        .route(
            "/warehouses/{id}/withdraw",
            post(handlers::warehouses::withdraw),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
