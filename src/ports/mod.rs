//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ConversationStore` - Per-user conversation context storage
//! - `CompletionProvider` - LLM chat-completion API
//! - `MessageRelay` - Messaging platform message-send API

mod completion_provider;
mod conversation_store;
mod message_relay;

pub use completion_provider::{CompletionError, CompletionProvider, ProviderInfo};
pub use conversation_store::{ConversationStore, StoreError, StoreSnapshot};
pub use message_relay::{MessageRelay, RelayError};
