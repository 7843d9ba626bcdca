use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::accounts;
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/signup", post(accounts::signup))
        .route(
            "/users/{user_id}",
            get(accounts::get_user).patch(accounts::update_user),
        )
        .route("/close", post(accounts::close_account))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
