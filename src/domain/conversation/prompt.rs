//! Context-aware prompt composition.

use super::context::ConversationContext;

const PREAMBLE: &str =
    "You are a helpful AI assistant integrated with Telex.im messaging platform. ";

const INSTRUCTION: &str = "Respond naturally and helpfully to the following message:\n\n";

/// Builds the single prompt sent to the completion API.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Composes the prompt for `message`.
    ///
    /// `context` is expected to already include `message` (count and topics
    /// reflect the current turn). Turn number and topic history are only
    /// mentioned once the context has recorded at least one message.
    pub fn build(&self, context: Option<&ConversationContext>, message: &str) -> String {
        let mut prompt = String::from(PREAMBLE);

        if let Some(ctx) = context.filter(|ctx| !ctx.is_fresh()) {
            prompt.push_str(&format!(
                "This is message #{} in the conversation. ",
                ctx.message_count()
            ));

            if !ctx.topics().is_empty() {
                let topics: Vec<&str> = ctx.topics().iter().map(|t| t.as_str()).collect();
                prompt.push_str(&format!(
                    "Previous topics discussed: {}. ",
                    topics.join(", ")
                ));
            }
        }

        prompt.push_str(INSTRUCTION);
        prompt.push_str(message);
        prompt
    }
}
