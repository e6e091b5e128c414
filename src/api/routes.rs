use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Sessions
        .route("/sessions", post(handlers::open_session))
        .route("/session", get(handlers::get_session))
        .route("/session/login", post(handlers::login))
        .route("/session/logout", post(handlers::logout))
        // Accounts
        .route("/accounts", post(handlers::register))
        // Statistics
        .route("/stats/global", get(handlers::global_stats))
        // Authenticated user
        .route("/me/profile", get(handlers::my_profile))
        .route("/me/plan", get(handlers::my_plan))
        .route("/me/recommendations", get(handlers::my_recommendations))
        .route("/me/peers", get(handlers::my_peers))
}
