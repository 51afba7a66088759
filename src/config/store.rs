//! Conversation store configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Conversation store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Conversations kept before the least recently updated is evicted
    #[serde(default = "default_max_conversations")]
    pub max_conversations: usize,
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_conversations == 0 {
            return Err(ValidationError::InvalidCapacity);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_conversations: default_max_conversations(),
        }
    }
}

fn default_max_conversations() -> usize {
    10_000
}
