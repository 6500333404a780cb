//! One-shot advisory flows.
//!
//! `AdvisoryService::run` validates a request, optionally grounds it in web
//! search results, sends it to the provider under the matching persona and
//! returns the reply.

use std::sync::Arc;

use pathwise_types::advisory::AdvisoryRequest;
use pathwise_types::error::AdvisoryError;
use pathwise_types::llm::{CompletionRequest, RequestSettings};
use pathwise_types::persona::PersonaKey;
use pathwise_types::search::SearchHit;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::llm::provider::LlmProvider;
use crate::persona::{PersonaCatalog, PersonaPromptBuilder};
use crate::search::SearchProvider;

use super::request;

/// Reply to an advisory request.
#[derive(Debug, Clone)]
pub struct AdvisoryReply {
    pub persona: PersonaKey,
    pub content: String,
    /// Search hits embedded in the system prompt (empty when ungrounded).
    pub sources: Vec<SearchHit>,
}

/// Service running advisory flows against one provider.
pub struct AdvisoryService<P: LlmProvider, S: SearchProvider> {
    provider: P,
    search: Option<S>,
    catalog: Arc<PersonaCatalog>,
    settings: RequestSettings,
    max_results: usize,
}

impl<P: LlmProvider, S: SearchProvider> AdvisoryService<P, S> {
    /// - `search`: `None` disables grounding for every persona
    /// - `max_results`: hits requested per search
    pub fn new(
        provider: P,
        search: Option<S>,
        catalog: Arc<PersonaCatalog>,
        settings: RequestSettings,
        max_results: usize,
    ) -> Self {
        Self {
            provider,
            search,
            catalog,
            settings,
            max_results,
        }
    }

    pub async fn run(&self, req: &AdvisoryRequest) -> Result<AdvisoryReply, AdvisoryError> {
        request::validate(req)?;

        let key = request::persona_for(req);
        let persona = self.catalog.get(key);
        let sources = if persona.web_search {
            self.gather_sources(req).await
        } else {
            Vec::new()
        };

        let system = PersonaPromptBuilder::build(persona, &sources);
        let completion = CompletionRequest::from_prompt(request::render_prompt(req), &self.settings)
            .with_system(system);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %completion.model,
            gen_ai.request.max_tokens = completion.max_tokens,
            persona = %key,
            flow = req.kind(),
        );

        let response = self
            .provider
            .complete(&completion)
            .instrument(span)
            .await
            .inspect_err(|e| warn!(flow = req.kind(), error = %e, "advisory completion failed"))?;

        info!(
            flow = req.kind(),
            persona = %key,
            sources = sources.len(),
            output_tokens = response.usage.output_tokens,
            "advisory reply ready"
        );

        Ok(AdvisoryReply {
            persona: key,
            content: response.content,
            sources,
        })
    }

    /// Search failures degrade to an ungrounded answer.
    async fn gather_sources(&self, req: &AdvisoryRequest) -> Vec<SearchHit> {
        let (Some(search), Some(query)) = (&self.search, request::search_query(req)) else {
            return Vec::new();
        };

        match search.search(&query, self.max_results).await {
            Ok(hits) => {
                debug!(provider = search.name(), %query, hits = hits.len(), "web search done");
                hits
            }
            Err(e) => {
                warn!(provider = search.name(), %query, error = %e, "web search failed; continuing without results");
                Vec::new()
            }
        }
    }
}
