//! HTTP adapter for the relay endpoints.
//!
//! - `GET /health` - Liveness and provider name
//! - `POST /webhook/telex` - Telex.im webhook (bearer-token protected)
//! - `POST /api/message` - Direct message, reply returned in the response
//! - `GET /api/agent/info` - Agent identity, model and uptime
//! - `GET /api/conversations/:user_id` - One user's conversation context
//! - `GET /api/metrics` - Store totals

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{ConversationApiError, MessageApiError, RelayAppState, WebhookApiError};
pub use routes::{api_routes, relay_router, webhook_routes};
