//! Deadline wrapper for completion providers.

use std::future::Future;
use std::time::Duration;

use pathwise_types::llm::{CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities};

use super::provider::LlmProvider;

/// Wraps a provider so that no single call outlives `limit`.
///
/// An elapsed deadline surfaces as `LlmError::Timeout`, which callers
/// treat like any other completion failure. The in-flight request is
/// dropped, not cancelled remotely.
pub struct TimeoutProvider<P> {
    inner: P,
    limit: Duration,
}

impl<P: LlmProvider> TimeoutProvider<P> {
    pub fn new(inner: P, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<P: LlmProvider> LlmProvider for TimeoutProvider<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        self.inner.capabilities()
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        let limit = self.limit;
        let call = self.inner.complete(request);
        async move {
            match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        provider = self.inner.name(),
                        after_ms = limit.as_millis() as u64,
                        "completion timed out"
                    );
                    Err(LlmError::Timeout {
                        after_ms: limit.as_millis() as u64,
                    })
                }
            }
        }
    }
}
