//! ProcessMessageHandler - Turns one inbound message into an annotated reply.

use std::sync::Arc;

use crate::domain::conversation::{AgentReply, PromptBuilder};
use crate::domain::foundation::UserId;
use crate::ports::{CompletionProvider, ConversationStore};

/// Command to process a user's message.
#[derive(Debug, Clone)]
pub struct ProcessMessageCommand {
    pub user_id: UserId,
    pub message: String,
}

impl ProcessMessageCommand {
    pub fn new(user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
        }
    }
}

/// Handler for processing messages.
///
/// Never fails: a completion error is logged and replaced by the fallback
/// reply, so the caller always has something to answer with.
pub struct ProcessMessageHandler {
    store: Arc<dyn ConversationStore>,
    provider: Arc<dyn CompletionProvider>,
    prompt_builder: PromptBuilder,
}

impl ProcessMessageHandler {
    pub fn new(store: Arc<dyn ConversationStore>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            store,
            provider,
            prompt_builder: PromptBuilder::new(),
        }
    }

    pub async fn handle(&self, cmd: ProcessMessageCommand) -> AgentReply {
        // 1. Record the message; the prompt sees the post-update context
        let context = self.store.record_message(&cmd.user_id, &cmd.message).await;

        // 2. Build prompt
        let prompt = self.prompt_builder.build(Some(&context), &cmd.message);

        // 3. Generate, falling back on any provider error
        let reply = match self.provider.complete(&prompt).await {
            Ok(text) => AgentReply::generated(text, &cmd.message),
            Err(error) => {
                tracing::warn!(
                    user_id = %cmd.user_id,
                    error = %error,
                    "Completion failed, using fallback reply"
                );
                AgentReply::fallback(&cmd.message)
            }
        };

        tracing::debug!(
            user_id = %cmd.user_id,
            intent = %reply.intent,
            confidence = reply.confidence,
            message_count = context.message_count(),
            "Message processed"
        );

        reply
    }
}
