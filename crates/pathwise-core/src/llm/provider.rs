//! LlmProvider trait definition.
//!
//! This is the core abstraction that all completion providers implement.
//! Uses RPITIT for `complete`; `BoxLlmProvider` restores object safety
//! where a provider is chosen at runtime.

use pathwise_types::llm::{CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities};

/// Trait for completion provider backends (Ollama, OpenAI, ...).
///
/// A call is opaque to its callers: it returns only when the provider has
/// produced a full reply or failed. Implementations live in pathwise-infra
/// (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "ollama", "openai").
    fn name(&self) -> &str;

    /// Context and output limits of the configured model.
    fn capabilities(&self) -> &ProviderCapabilities;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

/// Shared providers: the binary keeps one provider behind an `Arc` and
/// hands clones to each service.
impl<T: LlmProvider> LlmProvider for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        (**self).capabilities()
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send {
        (**self).complete(request)
    }
}
