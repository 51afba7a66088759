//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the relay domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{MessageId, UserId};
pub use timestamp::Timestamp;
