//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the relay routes with the server-wide layers:
//! request tracing and a whole-request timeout.

pub mod relay;

use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use relay::{relay_router, RelayAppState};

/// Builds the service router with state and middleware applied.
pub fn app_router(state: RelayAppState, request_timeout: Duration) -> Router {
    relay_router()
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
