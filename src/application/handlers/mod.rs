//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod relay;

pub use relay::{
    welcome_message, HandleWebhookHandler, ProcessMessageCommand, ProcessMessageHandler,
    TelexMessage, TelexUser, TelexWebhook, WebhookError, WebhookEvent, WebhookOutcome,
};
