//! Shared domain types for Pathwise.
//!
//! This crate contains the core domain types used across the Pathwise
//! assistant: interview turns, personas, advisory requests, users, search
//! hits, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod advisory;
pub mod config;
pub mod error;
pub mod interview;
pub mod llm;
pub mod persona;
pub mod search;
pub mod user;
