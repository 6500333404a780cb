//! Multi-turn conversation with the career coach persona.

use std::sync::Arc;

use pathwise_types::error::AdvisoryError;
use pathwise_types::llm::{CompletionRequest, Message, RequestSettings};
use pathwise_types::persona::PersonaKey;
use tracing::{Instrument, debug, info_span, warn};

use crate::llm::provider::LlmProvider;
use crate::persona::{PersonaCatalog, PersonaPromptBuilder};

/// Open-ended chat that sends the whole history on every turn.
///
/// A failed completion removes the unanswered question again so the
/// history keeps alternating user and assistant messages.
pub struct CoachChat {
    system_prompt: String,
    settings: RequestSettings,
    history: Vec<Message>,
}

impl CoachChat {
    pub fn new(catalog: &Arc<PersonaCatalog>, settings: RequestSettings) -> Self {
        let persona = catalog.get(PersonaKey::AskCareerCoach);
        Self {
            system_prompt: PersonaPromptBuilder::build(persona, &[]),
            settings,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub async fn ask<P: LlmProvider>(
        &mut self,
        provider: &P,
        question: &str,
    ) -> Result<String, AdvisoryError> {
        if question.trim().is_empty() {
            return Err(AdvisoryError::validation("question", "is required"));
        }

        self.history.push(Message::user(question.trim()));
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: self.history.clone(),
            system: Some(self.system_prompt.clone()),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = provider.name(),
            gen_ai.request.model = %request.model,
            persona = "ask_career_coach",
            messages = request.messages.len(),
        );

        match provider.complete(&request).instrument(span).await {
            Ok(response) => {
                self.history.push(Message::assistant(response.content.clone()));
                debug!(messages = self.history.len(), "coach reply recorded");
                Ok(response.content)
            }
            Err(e) => {
                warn!(error = %e, "coach completion failed");
                self.history.pop();
                Err(e.into())
            }
        }
    }
}
