//! Keyword-based message annotation.
//!
//! Maps raw message text to an [`Intent`], [`Entities`] and a list of
//! [`Topic`]s using fixed tables. Every function here is total: any input,
//! including the empty string, produces a value.

use super::values::{Entities, Intent, Topic};

/// Intent triggers, checked in order. The first rule with a matching
/// substring decides the intent.
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (&["help", "assist"], Intent::HelpRequest),
    (&["?"], Intent::Question),
    (&["thank"], Intent::Gratitude),
    (&["hello", "hi"], Intent::Greeting),
];

/// Topic keywords in detection order.
pub const TOPIC_KEYWORDS: &[(&str, Topic)] = &[
    ("code", Topic::Programming),
    ("python", Topic::Programming),
    ("go", Topic::Programming),
    ("weather", Topic::Weather),
    ("help", Topic::Support),
    ("how", Topic::Tutorial),
];

/// Classifies the purpose of a message.
///
/// Matching is case-insensitive substring matching, so "this" counts as
/// a greeting and "helpful" as a help request.
pub fn classify_intent(text: &str) -> Intent {
    let lowercase = text.to_lowercase();

    INTENT_RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| lowercase.contains(t)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::General)
}

/// Pulls the last `@mention` and last `#hashtag` token out of a message.
pub fn extract_entities(text: &str) -> Entities {
    let mut entities = Entities::default();

    for word in text.to_lowercase().split_whitespace() {
        if word.starts_with('@') {
            entities.mention = Some(word.to_string());
        }
        if word.starts_with('#') {
            entities.hashtag = Some(word.to_string());
        }
    }

    entities
}

/// Detects topics mentioned in a message, in [`TOPIC_KEYWORDS`] order.
///
/// Each topic appears at most once in the result.
pub fn extract_topics(text: &str) -> Vec<Topic> {
    let lowercase = text.to_lowercase();
    let mut topics = Vec::new();

    for (keyword, topic) in TOPIC_KEYWORDS {
        if lowercase.contains(keyword) && !topics.contains(topic) {
            topics.push(*topic);
        }
    }

    topics
}
