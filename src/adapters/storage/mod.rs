//! Storage Adapters
//!
//! Implementations of the ConversationStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryConversationStore** - Bounded, lock-guarded in-process store
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryConversationStore;
//!
//! let store = InMemoryConversationStore::with_capacity(config.store.max_conversations);
//! ```

mod in_memory_conversation_store;

pub use in_memory_conversation_store::{InMemoryConversationStore, DEFAULT_MAX_CONVERSATIONS};
