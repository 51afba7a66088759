//! Telex Relay - AI agent for the Telex.im messaging platform
//!
//! Receives chat events over a webhook, asks an OpenAI-compatible completion
//! API (Groq) for a reply, and relays it back to the sender. A bounded
//! in-memory store keeps per-user conversation context (message count and
//! topics) that conditions each prompt.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
