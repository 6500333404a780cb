//! Completion provider abstractions for Pathwise.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: object-safe wrapper for runtime provider selection
//! - `TimeoutProvider`: bounds every call to a wrapped provider

pub mod box_provider;
pub mod provider;
pub mod timeout;

#[cfg(test)]
pub(crate) mod stub;
