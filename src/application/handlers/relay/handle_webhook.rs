//! HandleWebhookHandler - Dispatches Telex.im webhook events.
//!
//! Message events are processed and the reply is relayed back to the
//! sender. Join events get a welcome message. Everything else is
//! acknowledged without side effects.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use super::process_message::{ProcessMessageCommand, ProcessMessageHandler};
use crate::domain::conversation::AgentReply;
use crate::domain::foundation::{Timestamp, UserId, ValidationError};
use crate::ports::{MessageRelay, RelayError};

/// Webhook body as posted by Telex.im.
#[derive(Debug, Clone, Deserialize)]
pub struct TelexWebhook {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub message: Option<TelexMessage>,
    #[serde(default)]
    pub user: Option<TelexUser>,
}

/// Message carried by message events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelexMessage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// User carried by membership events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelexUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl TelexUser {
    /// Display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Recognised webhook event kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    MessageReceived,
    UserJoined,
    UserTyping,
    Unknown(String),
}

impl WebhookEvent {
    pub fn parse(event: &str) -> Self {
        match event {
            "message.received" | "message" => WebhookEvent::MessageReceived,
            "user.joined" => WebhookEvent::UserJoined,
            "user.typing" => WebhookEvent::UserTyping,
            other => WebhookEvent::Unknown(other.to_string()),
        }
    }
}

/// What the handler did with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookOutcome {
    /// A reply was generated and relayed.
    Processed(AgentReply),
    /// The agent's own message; nothing done.
    Ignored,
    /// A welcome message was relayed.
    Welcomed,
    /// Event accepted without action.
    Acknowledged,
}

/// Webhook handling errors.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] ValidationError),

    #[error("failed to send response: {0}")]
    ReplyNotSent(#[source] RelayError),

    #[error("failed to send welcome message: {0}")]
    WelcomeNotSent(#[source] RelayError),
}

/// Text sent to a user who joins.
pub fn welcome_message(name: &str) -> String {
    format!(
        "Welcome {}! 👋 I'm an AI assistant here to help. Feel free to ask me anything!",
        name
    )
}

/// Handler for webhook events.
pub struct HandleWebhookHandler {
    processor: Arc<ProcessMessageHandler>,
    relay: Arc<dyn MessageRelay>,
    agent_id: String,
}

impl HandleWebhookHandler {
    pub fn new(
        processor: Arc<ProcessMessageHandler>,
        relay: Arc<dyn MessageRelay>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            processor,
            relay,
            agent_id: agent_id.into(),
        }
    }

    pub async fn handle(&self, webhook: TelexWebhook) -> Result<WebhookOutcome, WebhookError> {
        let event = WebhookEvent::parse(&webhook.event);
        tracing::info!(
            event = %webhook.event,
            from = webhook.message.as_ref().map(|m| m.from.as_str()).unwrap_or_default(),
            "Received webhook event"
        );

        match event {
            WebhookEvent::MessageReceived => {
                self.handle_message(webhook.message.unwrap_or_default()).await
            }
            WebhookEvent::UserJoined => self.handle_user_joined(webhook.user.unwrap_or_default()).await,
            WebhookEvent::UserTyping => Ok(WebhookOutcome::Acknowledged),
            WebhookEvent::Unknown(name) => {
                tracing::warn!(event = %name, "Unknown webhook event type");
                Ok(WebhookOutcome::Acknowledged)
            }
        }
    }

    async fn handle_message(&self, message: TelexMessage) -> Result<WebhookOutcome, WebhookError> {
        if message.from == self.agent_id {
            return Ok(WebhookOutcome::Ignored);
        }

        let sender = UserId::new(message.from)
            .map_err(|_| ValidationError::empty_field("message.from"))?;

        let reply = self
            .processor
            .handle(ProcessMessageCommand::new(sender.clone(), message.content))
            .await;

        if let Err(error) = self.relay.send(&sender, &reply.reply).await {
            tracing::error!(user_id = %sender, error = %error, "Failed to relay reply");
            return Err(WebhookError::ReplyNotSent(error));
        }

        tracing::info!(user_id = %sender, confidence = reply.confidence, "Sent reply");
        Ok(WebhookOutcome::Processed(reply))
    }

    async fn handle_user_joined(&self, user: TelexUser) -> Result<WebhookOutcome, WebhookError> {
        let user_id =
            UserId::new(user.id.clone()).map_err(|_| ValidationError::empty_field("user.id"))?;
        let text = welcome_message(user.display_name());

        if let Err(error) = self.relay.send(&user_id, &text).await {
            tracing::error!(user_id = %user_id, error = %error, "Failed to send welcome message");
            return Err(WebhookError::WelcomeNotSent(error));
        }

        Ok(WebhookOutcome::Welcomed)
    }
}
