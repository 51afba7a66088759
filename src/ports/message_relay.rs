//! Message Relay Port - Delivers replies through the messaging platform.

use async_trait::async_trait;

use crate::domain::foundation::UserId;

/// Port for sending a text message to a platform user.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Sends `content` to `to` on behalf of the agent.
    async fn send(&self, to: &UserId, content: &str) -> Result<(), RelayError>;
}

/// Relay errors.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Platform answered with a status other than 200/201.
    #[error("messaging API rejected message: status {status}: {body}")]
    Rejected {
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
}
