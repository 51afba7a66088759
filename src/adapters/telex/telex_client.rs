//! Telex Client - MessageRelay over the Telex.im REST API.
//!
//! Replies are delivered with a single `POST {base_url}/messages`. Both
//! `200 OK` and `201 Created` count as delivered.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::foundation::{MessageId, Timestamp, UserId};
use crate::ports::{MessageRelay, RelayError};

/// Default Telex.im API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.telex.im/v1";

/// Default identity the agent sends as.
pub const DEFAULT_AGENT_ID: &str = "ai-agent-001";

/// Configuration for the Telex client.
#[derive(Debug, Clone)]
pub struct TelexConfig {
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Sender id stamped on every outbound message.
    pub agent_id: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl TelexConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(Secret::new(api_key.into()))
    }

    /// Creates a new configuration from an already wrapped API key.
    pub fn from_secret(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            agent_id: DEFAULT_AGENT_ID.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the agent id.
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = agent_id.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Wire shape of a message sent to Telex.im.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage<'a> {
    pub id: MessageId,
    pub from: &'a str,
    pub to: &'a str,
    pub content: &'a str,
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl<'a> OutboundMessage<'a> {
    /// Builds a text message from the agent to `to`.
    pub fn text(from: &'a str, to: &'a UserId, content: &'a str) -> Self {
        Self {
            id: MessageId::new(),
            from,
            to: to.as_str(),
            content,
            timestamp: Timestamp::now(),
            kind: "text",
        }
    }
}

/// Telex.im relay client.
pub struct TelexClient {
    config: TelexConfig,
    client: Client,
}

impl TelexClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: TelexConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The sender id used on outbound messages.
    pub fn agent_id(&self) -> &str {
        &self.config.agent_id
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.config.base_url.trim_end_matches('/'))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> RelayError {
        if e.is_timeout() {
            RelayError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else {
            RelayError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl MessageRelay for TelexClient {
    async fn send(&self, to: &UserId, content: &str) -> Result<(), RelayError> {
        let message = OutboundMessage::text(&self.config.agent_id, to, content);

        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&message)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            tracing::debug!(to = %to, message_id = %message.id, "Message delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
