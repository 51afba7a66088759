//! Axum router configuration for relay endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    agent_info, get_conversation, handle_direct_message, handle_telex_webhook, health, metrics,
    RelayAppState,
};

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<RelayAppState> {
    Router::new()
        .route("/message", post(handle_direct_message))
        .route("/agent/info", get(agent_info))
        .route("/conversations/:user_id", get(get_conversation))
        .route("/metrics", get(metrics))
}

/// Routes mounted under `/webhook`.
pub fn webhook_routes() -> Router<RelayAppState> {
    Router::new().route("/telex", post(handle_telex_webhook))
}

/// Create the complete relay router.
///
/// # Example
///
/// ```ignore
/// let app = relay_router().with_state(state);
/// ```
pub fn relay_router() -> Router<RelayAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/webhook", webhook_routes())
        .nest("/api", api_routes())
}
