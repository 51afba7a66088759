//! In-Memory Conversation Store Adapter
//!
//! Keeps every conversation context in one `HashMap` behind a single
//! `RwLock`. Updates take the write guard for the whole read-modify-write,
//! which makes them atomic per user (and across users).
//!
//! Retention is bounded: once `capacity` users are stored, a message from a
//! new user evicts the least recently updated conversation. A `BTreeMap`
//! keyed by update clock keeps that lookup logarithmic.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{ConversationStore, StoreError, StoreSnapshot};

/// Default number of conversations kept before eviction starts.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 10_000;

#[derive(Debug)]
struct Entry {
    context: ConversationContext,
    /// Value of the store clock at the last update; smallest is evicted first.
    touched: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<UserId, Entry>,
    /// Update clock -> user. Mirrors `Entry::touched` for every entry.
    recency: BTreeMap<u64, UserId>,
    clock: u64,
}

impl Inner {
    fn evict_least_recent(&mut self) -> Option<UserId> {
        let (_, victim) = self.recency.pop_first()?;
        self.entries.remove(&victim);
        Some(victim)
    }

    fn record(&mut self, user_id: &UserId, message: &str) -> ConversationContext {
        self.clock += 1;
        let clock = self.clock;

        let entry = self.entries.entry(user_id.clone()).or_insert_with(|| {
            tracing::debug!(user_id = %user_id, "Starting new conversation");
            Entry {
                context: ConversationContext::new(user_id.clone()),
                touched: 0,
            }
        });
        entry.context.record_message(message, Timestamp::now());
        let previous = std::mem::replace(&mut entry.touched, clock);
        let context = entry.context.clone();

        self.recency.remove(&previous);
        self.recency.insert(clock, user_id.clone());
        context
    }
}

/// In-memory, bounded conversation store.
#[derive(Debug, Clone)]
pub struct InMemoryConversationStore {
    inner: Arc<RwLock<Inner>>,
    capacity: usize,
}

impl InMemoryConversationStore {
    /// Creates a store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CONVERSATIONS)
    }

    /// Creates a store that keeps at most `capacity` conversations (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of conversations kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored conversations.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// True when no conversation is stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn record_message(&self, user_id: &UserId, message: &str) -> ConversationContext {
        let mut inner = self.inner.write().await;

        if !inner.entries.contains_key(user_id) && inner.entries.len() >= self.capacity {
            if let Some(evicted) = inner.evict_least_recent() {
                tracing::debug!(user_id = %evicted, "Evicted least recently updated conversation");
            }
        }

        inner.record(user_id, message)
    }

    async fn get(&self, user_id: &UserId) -> Result<ConversationContext, StoreError> {
        let inner = self.inner.read().await;
        inner
            .entries
            .get(user_id)
            .map(|entry| entry.context.clone())
            .ok_or_else(|| StoreError::NotFound(user_id.clone()))
    }

    async fn snapshot(&self) -> StoreSnapshot {
        let inner = self.inner.read().await;
        StoreSnapshot {
            conversation_count: inner.entries.len(),
            total_messages: inner
                .entries
                .values()
                .map(|entry| entry.context.message_count())
                .sum(),
        }
    }
}
