//! Completion Provider Port - Interface for the LLM completion API.
//!
//! The relay sends one prompt per inbound message and expects one reply.
//! No history replay and no streaming: the prompt already carries whatever
//! context the conversation store holds.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl CompletionProvider for EchoProvider {
//!     async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
//!         Ok(prompt.to_string())
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo-1")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;

/// Port for chat-completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends `prompt` as the sole user turn and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Provider name and model, for status endpoints and logs.
    fn provider_info(&self) -> ProviderInfo;
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "groq").
    pub name: String,
    /// Model identifier (e.g., "llama-3.3-70b-versatile").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Completion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Rate limited by provider.
    #[error("rate limited")]
    RateLimited,

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider answered with a non-success status.
    #[error("provider unavailable: status {status}: {body}")]
    Unavailable {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Response contained no choices.
    #[error("empty response from provider")]
    EmptyResponse,
}

impl CompletionError {
    /// Creates an unavailable error.
    pub fn unavailable(status: u16, body: impl Into<String>) -> Self {
        Self::Unavailable {
            status,
            body: body.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
