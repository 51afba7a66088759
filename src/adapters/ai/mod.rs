//! Completion Provider Adapters.
//!
//! Implementations of the CompletionProvider port.
//!
//! ## Available Adapters
//!
//! - `GroqProvider` - Groq's OpenAI-compatible chat-completions API
//! - `MockCompletionProvider` - Configurable mock for testing

mod groq_provider;
mod mock_provider;

pub use groq_provider::{GroqConfig, GroqProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_provider::{MockCompletionProvider, MockError};
