//! Conversation domain module.
//!
//! Per-user conversation context, keyword-based annotation of inbound
//! messages, prompt composition and the annotated reply returned to callers.

mod context;
mod extractor;
mod prompt;
mod reply;
mod values;

pub use context::ConversationContext;
pub use extractor::{classify_intent, extract_entities, extract_topics, TOPIC_KEYWORDS};
pub use prompt::PromptBuilder;
pub use reply::{AgentReply, FALLBACK_REPLY, GENERATED_CONFIDENCE};
pub use values::{Entities, Intent, Topic};
