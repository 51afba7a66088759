//! Annotated agent reply.

use serde::Serialize;

use super::extractor::{classify_intent, extract_entities};
use super::values::{Entities, Intent};

/// Reply sent when the completion API could not produce one.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble processing your message right now. Please try again.";

/// Confidence attached to a generated reply.
pub const GENERATED_CONFIDENCE: f64 = 0.90;

/// Generated (or fallback) reply plus the annotations of the inbound message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReply {
    pub reply: String,
    pub intent: Intent,
    pub entities: Entities,
    pub confidence: f64,
}

impl AgentReply {
    /// Wraps a generated reply and annotates the message it answers.
    pub fn generated(reply: impl Into<String>, inbound: &str) -> Self {
        Self {
            reply: reply.into(),
            intent: classify_intent(inbound),
            entities: extract_entities(inbound),
            confidence: GENERATED_CONFIDENCE,
        }
    }

    /// Fixed apology with zero confidence.
    pub fn fallback(inbound: &str) -> Self {
        Self {
            reply: FALLBACK_REPLY.to_string(),
            intent: classify_intent(inbound),
            entities: extract_entities(inbound),
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_reply_is_annotated() {
        let reply = AgentReply::generated("Sure!", "can you help @bob?");

        assert_eq!(reply.reply, "Sure!");
        assert_eq!(reply.intent, Intent::HelpRequest);
        assert_eq!(reply.entities.mention.as_deref(), Some("@bob?"));
        assert_eq!(reply.confidence, GENERATED_CONFIDENCE);
    }

    #[test]
    fn fallback_has_zero_confidence() {
        let reply = AgentReply::fallback("hello");

        assert_eq!(reply.reply, FALLBACK_REPLY);
        assert_eq!(reply.confidence, 0.0);
        assert_eq!(reply.intent, Intent::Greeting);
    }

    #[test]
    fn serializes_wire_shape() {
        let reply = AgentReply::generated("Hi!", "hello #rust");
        let json = serde_json::to_value(&reply).unwrap();

        assert_eq!(json["reply"], "Hi!");
        assert_eq!(json["intent"], "greeting");
        assert_eq!(json["entities"], serde_json::json!({"hashtag": "#rust"}));
        assert_eq!(json["confidence"], 0.9);
    }
}
