//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion providers (Groq, mock)
//! - `http` - Axum routes and handlers
//! - `storage` - In-memory conversation store
//! - `telex` - Telex.im message relay (REST client, mock)

pub mod ai;
pub mod http;
pub mod storage;
pub mod telex;

pub use ai::{GroqConfig, GroqProvider, MockCompletionProvider};
pub use http::{app_router, RelayAppState};
pub use storage::InMemoryConversationStore;
pub use telex::{MockMessageRelay, TelexClient, TelexConfig};
