//! Messaging Platform Adapters.
//!
//! Implementations of the MessageRelay port.
//!
//! - `TelexClient` - Telex.im message-send API
//! - `MockMessageRelay` - Records sent messages for testing

mod mock_relay;
mod telex_client;

pub use mock_relay::{MockMessageRelay, SentMessage};
pub use telex_client::{OutboundMessage, TelexClient, TelexConfig, DEFAULT_AGENT_ID, DEFAULT_BASE_URL};
