//! Scripted provider shared by unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use pathwise_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
};

use super::provider::LlmProvider;

#[derive(Clone)]
pub(crate) enum StubReply {
    Text(String),
    Fail(String),
}

/// Replays queued replies in order and records every request it sees.
/// Once the queue is drained it keeps answering "ok".
#[derive(Clone)]
pub(crate) struct StubProvider {
    capabilities: ProviderCapabilities,
    replies: Arc<Mutex<VecDeque<StubReply>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl StubProvider {
    pub(crate) fn new(replies: impl IntoIterator<Item = StubReply>) -> Self {
        Self {
            capabilities: ProviderCapabilities::default(),
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn replying<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
        Self::new(replies.into_iter().map(|r| StubReply::Text(r.into())))
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Text of the single user message in the most recent request.
    pub(crate) fn last_prompt(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let last = requests.last().expect("no request recorded");
        last.messages.last().expect("empty request").content.clone()
    }
}

impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| StubReply::Text("ok".to_string()));
        async move {
            match reply {
                StubReply::Text(content) => Ok(CompletionResponse {
                    id: "resp-stub".to_string(),
                    content,
                    model: "stub-model".to_string(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage {
                        input_tokens: 10,
                        output_tokens: 20,
                    },
                }),
                StubReply::Fail(message) => Err(LlmError::Provider { message }),
            }
        }
    }
}
