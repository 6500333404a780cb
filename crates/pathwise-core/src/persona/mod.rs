//! Persona catalog and system prompt rendering.
//!
//! The catalog is parsed and validated once at startup and shared as an
//! `Arc<PersonaCatalog>`; it never changes afterwards.

pub mod catalog;
pub mod prompt;

pub use catalog::PersonaCatalog;
pub use prompt::PersonaPromptBuilder;
