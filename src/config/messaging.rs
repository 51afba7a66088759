//! Messaging platform configuration (Telex.im)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::{validate_http_url, ValidationError};

/// Messaging platform configuration
///
/// The API key authenticates outbound sends and is also the bearer token
/// expected on inbound webhooks.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingConfig {
    /// Platform API key
    pub api_key: Secret<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identity the agent sends as
    #[serde(default = "default_agent_id")]
    pub agent_id: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl MessagingConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate messaging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("MESSAGING__API_KEY"));
        }
        validate_http_url(&self.base_url, "MESSAGING__BASE_URL")?;
        if self.agent_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("MESSAGING__AGENT_ID"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            api_key: Secret::new(String::new()),
            base_url: default_base_url(),
            agent_id: default_agent_id(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.telex.im/v1".to_string()
}

fn default_agent_id() -> String {
    "ai-agent-001".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messaging_config_defaults() {
        let config = MessagingConfig::default();
        assert_eq!(config.base_url, "https://api.telex.im/v1");
        assert_eq!(config.agent_id, "ai-agent-001");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_missing_key() {
        assert!(MessagingConfig::default().validate().is_err());
    }

    #[test]
    fn test_validation_empty_agent_id() {
        let config = MessagingConfig {
            api_key: Secret::new("telex_xxx".to_string()),
            agent_id: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("MESSAGING__AGENT_ID"))
        );
    }

    #[test]
    fn test_validation_valid_config() {
        let config = MessagingConfig {
            api_key: Secret::new("telex_xxx".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
