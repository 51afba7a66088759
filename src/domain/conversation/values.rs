//! Annotation value types produced by the extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse purpose of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Asks for help or assistance.
    HelpRequest,
    /// Contains a question mark.
    Question,
    /// Thanks the agent.
    Gratitude,
    /// Says hello.
    Greeting,
    /// Anything else.
    General,
}

impl Intent {
    /// Returns the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::HelpRequest => "help_request",
            Intent::Question => "question",
            Intent::Gratitude => "gratitude",
            Intent::Greeting => "greeting",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject tag accumulated per conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Programming,
    Weather,
    Support,
    Tutorial,
}

impl Topic {
    /// Returns the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Programming => "programming",
            Topic::Weather => "weather",
            Topic::Support => "support",
            Topic::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured tokens pulled out of a message.
///
/// Holds at most one token per kind; the last occurrence in a message wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag: Option<String>,
}

impl Entities {
    /// True when no entity kind was found.
    pub fn is_empty(&self) -> bool {
        self.mention.is_none() && self.hashtag.is_none()
    }
}
