//! Relay command handlers.

mod handle_webhook;
mod process_message;

pub use handle_webhook::{
    welcome_message, HandleWebhookHandler, TelexMessage, TelexUser, TelexWebhook, WebhookError,
    WebhookEvent, WebhookOutcome,
};
pub use process_message::{ProcessMessageCommand, ProcessMessageHandler};
