//! HTTP handlers for relay endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers and
//! the read side of the conversation store.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::application::handlers::{
    HandleWebhookHandler, ProcessMessageCommand, ProcessMessageHandler, TelexWebhook,
    WebhookError,
};
use crate::domain::foundation::{Timestamp, UserId, ValidationError};
use crate::ports::{CompletionProvider, ConversationStore, MessageRelay, StoreError};

use super::dto::{
    AgentInfoResponse, AgentReplyResponse, ConversationResponse, DirectMessageRequest,
    ErrorResponse, HealthResponse, MetricsResponse, WebhookStatusResponse, AGENT_NAME,
    CAPABILITIES,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct RelayAppState {
    pub store: Arc<dyn ConversationStore>,
    pub provider: Arc<dyn CompletionProvider>,
    pub relay: Arc<dyn MessageRelay>,
    /// Sender id of the agent; webhook messages from it are ignored.
    pub agent_id: String,
    /// Bearer token expected on inbound webhooks.
    pub webhook_secret: Secret<String>,
    pub started_at: Timestamp,
}

impl RelayAppState {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        provider: Arc<dyn CompletionProvider>,
        relay: Arc<dyn MessageRelay>,
        agent_id: impl Into<String>,
        webhook_secret: Secret<String>,
    ) -> Self {
        Self {
            store,
            provider,
            relay,
            agent_id: agent_id.into(),
            webhook_secret,
            started_at: Timestamp::now(),
        }
    }

    pub fn process_message_handler(&self) -> ProcessMessageHandler {
        ProcessMessageHandler::new(self.store.clone(), self.provider.clone())
    }

    pub fn webhook_handler(&self) -> HandleWebhookHandler {
        HandleWebhookHandler::new(
            Arc::new(self.process_message_handler()),
            self.relay.clone(),
            self.agent_id.clone(),
        )
    }

    /// Compares the Authorization header with `Bearer <secret>` in constant time.
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        let Some(provided) = headers.get(header::AUTHORIZATION) else {
            return false;
        };
        let expected = format!("Bearer {}", self.webhook_secret.expose_secret());
        provided.as_bytes().ct_eq(expected.as_bytes()).into()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Status Endpoints (GET)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(state): State<RelayAppState>) -> impl IntoResponse {
    Json(HealthResponse::healthy(&state.provider.provider_info()))
}

/// GET /api/agent/info
pub async fn agent_info(State(state): State<RelayAppState>) -> impl IntoResponse {
    let provider = state.provider.provider_info();
    Json(AgentInfoResponse {
        agent_id: state.agent_id.clone(),
        name: AGENT_NAME,
        version: env!("CARGO_PKG_VERSION"),
        ai_provider: provider.name,
        model: provider.model,
        capabilities: CAPABILITIES,
        status: "online",
        uptime: Timestamp::now().secs_since(&state.started_at),
    })
}

/// GET /api/conversations/:user_id
pub async fn get_conversation(
    State(state): State<RelayAppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ConversationApiError> {
    let user_id = UserId::new(user_id).map_err(|_| ConversationApiError::NotFound)?;
    let context = state.store.get(&user_id).await?;
    Ok(Json(ConversationResponse::from(context)))
}

/// GET /api/metrics
pub async fn metrics(State(state): State<RelayAppState>) -> impl IntoResponse {
    let snapshot = state.store.snapshot().await;
    Json(MetricsResponse::new(snapshot, state.provider.provider_info()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Endpoints (POST)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /webhook/telex
///
/// The bearer token is checked before the body is looked at.
pub async fn handle_telex_webhook(
    State(state): State<RelayAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    if !state.is_authorized(&headers) {
        tracing::warn!("Unauthorized webhook attempt");
        return Err(WebhookApiError::Unauthorized);
    }

    let webhook: TelexWebhook = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Error parsing webhook");
        WebhookApiError::InvalidPayload
    })?;

    let outcome = state.webhook_handler().handle(webhook).await?;
    Ok(Json(WebhookStatusResponse::from(outcome)))
}

/// POST /api/message
pub async fn handle_direct_message(
    State(state): State<RelayAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, MessageApiError> {
    let request: DirectMessageRequest =
        serde_json::from_slice(&body).map_err(|e| MessageApiError::BadRequest(e.to_string()))?;

    let user_id = request
        .user_id
        .ok_or_else(|| ValidationError::empty_field("userId"))
        .and_then(|id| UserId::new(id).map_err(|_| ValidationError::empty_field("userId")))?;

    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ValidationError::empty_field("message"))?;

    let reply = state
        .process_message_handler()
        .handle(ProcessMessageCommand::new(user_id, message))
        .await;

    Ok(Json(AgentReplyResponse::from(reply)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Webhook errors, rendered as `{"status":"error","message":...}`.
#[derive(Debug)]
pub enum WebhookApiError {
    Unauthorized,
    InvalidPayload,
    Handler(WebhookError),
}

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self::Handler(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebhookApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            WebhookApiError::InvalidPayload
            | WebhookApiError::Handler(WebhookError::InvalidPayload(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid payload")
            }
            WebhookApiError::Handler(WebhookError::ReplyNotSent(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send response")
            }
            WebhookApiError::Handler(WebhookError::WelcomeNotSent(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send welcome message")
            }
        };

        (status, Json(WebhookStatusResponse::error(message))).into_response()
    }
}

/// Direct-message errors, rendered as `{"error":...}`.
#[derive(Debug)]
pub enum MessageApiError {
    BadRequest(String),
}

impl From<ValidationError> for MessageApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for MessageApiError {
    fn into_response(self) -> Response {
        match self {
            MessageApiError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(reason))).into_response()
            }
        }
    }
}

/// Conversation lookup errors.
#[derive(Debug)]
pub enum ConversationApiError {
    NotFound,
}

impl From<StoreError> for ConversationApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound,
        }
    }
}

impl IntoResponse for ConversationApiError {
    fn into_response(self) -> Response {
        match self {
            ConversationApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("No conversation found")),
            )
                .into_response(),
        }
    }
}
