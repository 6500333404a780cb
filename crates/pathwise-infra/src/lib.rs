//! Infrastructure layer for Pathwise.
//!
//! Contains implementations of the port traits defined in `pathwise-core`:
//! SQLite user storage, argon2 password hashing, the OpenAI-compatible
//! completion client, DuckDuckGo search, and resume text extraction.

pub mod config;
pub mod crypto;
pub mod extract;
pub mod filesystem;
pub mod llm;
pub mod search;
pub mod sqlite;
