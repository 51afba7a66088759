//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, errors)
//! - `conversation` - Conversation context, message annotation and prompts

pub mod conversation;
pub mod foundation;
