//! Per-user conversation state.

use crate::domain::foundation::{Timestamp, UserId};

use super::extractor::extract_topics;
use super::values::Topic;

/// Accumulated state of one user's conversation.
///
/// Created lazily on the first message and mutated in place afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationContext {
    user_id: UserId,
    last_message: String,
    message_count: u64,
    topics: Vec<Topic>,
    timestamp: Timestamp,
}

impl ConversationContext {
    /// Creates an empty context that has not seen any message yet.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            last_message: String::new(),
            message_count: 0,
            topics: Vec::new(),
            timestamp: Timestamp::now(),
        }
    }

    /// Applies an inbound message.
    ///
    /// Replaces the last message, bumps the counter, stamps the update time
    /// and merges any newly detected topics, keeping first-seen order.
    pub fn record_message(&mut self, message: &str, at: Timestamp) {
        self.last_message = message.to_string();
        self.message_count += 1;
        self.timestamp = at;

        for topic in extract_topics(message) {
            if !self.topics.contains(&topic) {
                self.topics.push(topic);
            }
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// True until the first message has been recorded.
    pub fn is_fresh(&self) -> bool {
        self.message_count == 0
    }
}
