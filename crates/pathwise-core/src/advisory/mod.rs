//! Advisory flows built on the persona catalog.
//!
//! - `request`: validation, persona routing and prompt rendering
//! - `AdvisoryService`: one-shot flows with optional web grounding
//! - `CoachChat`: multi-turn chat with the career coach

pub mod chat;
pub mod request;
pub mod service;

pub use chat::CoachChat;
pub use service::{AdvisoryReply, AdvisoryService};
