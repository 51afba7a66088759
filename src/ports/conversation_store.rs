//! Conversation Store Port - Process-wide per-user conversation state.
//!
//! Implementations must apply [`ConversationStore::record_message`] as one
//! atomic read-modify-write per user: concurrent messages for the same user
//! never lose an increment or interleave topic merges, and readers never
//! observe a half-applied update.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::UserId;

/// Port for storing conversation contexts.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Records an inbound message for `user_id`, creating the context on
    /// first contact.
    ///
    /// Returns a snapshot of the context after the update.
    async fn record_message(&self, user_id: &UserId, message: &str) -> ConversationContext;

    /// Looks up the context for `user_id`.
    async fn get(&self, user_id: &UserId) -> Result<ConversationContext, StoreError>;

    /// Aggregate counters over every stored conversation.
    async fn snapshot(&self) -> StoreSnapshot;
}

/// Aggregate view of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    /// Number of distinct users with a stored context.
    pub conversation_count: usize,
    /// Sum of message counts across all contexts.
    pub total_messages: u64,
}

/// Conversation store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no conversation found for user {0}")]
    NotFound(UserId),
}
