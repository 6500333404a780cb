//! Mock interview session state machine.
//!
//! A session is an explicitly owned value: it holds the position, the
//! question type and the append-only turn history, and it drives one
//! completion call per answer. There is no terminal phase; an interview
//! ends when its owner stops submitting answers.

use pathwise_types::config::{InterviewSettings, ProviderSettings};
use pathwise_types::error::{InterviewError, ValidationField};
use pathwise_types::interview::{QuestionType, SessionPhase, Turn, TurnRole};
use pathwise_types::llm::{CompletionRequest, RequestSettings};
use tracing::{Instrument, debug, info, info_span, warn};

use crate::llm::provider::LlmProvider;

use super::prompt::InterviewPromptBuilder;
use super::replay::{Replay, replay};

/// Assistant turn seeded by [`InterviewSession::start`].
pub const OPENING_LINE: &str = "Let's begin your interview! Tell me about yourself";

/// How strictly `start` checks the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// Blank (after trimming) positions are rejected.
    #[default]
    RequirePosition,
    /// Any position is accepted, including an empty one.
    AllowBlankPosition,
}

/// Knobs fixed for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub start_policy: StartPolicy,
    /// Maximum number of answered user turns. `None` is unbounded.
    pub max_turns: Option<u32>,
    pub request: RequestSettings,
    /// Persona prompt sent alongside the rendered interview prompt.
    pub system_prompt: Option<String>,
}

impl SessionOptions {
    pub fn from_settings(provider: &ProviderSettings, interview: &InterviewSettings) -> Self {
        Self {
            start_policy: if interview.require_position {
                StartPolicy::RequirePosition
            } else {
                StartPolicy::AllowBlankPosition
            },
            max_turns: interview.max_turns,
            request: provider.request_settings(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

/// One mock interview.
///
/// Turns strictly alternate after the assistant's opening line, except
/// that a failed completion leaves the latest user answer without a reply.
/// That pending answer must be resolved with [`retry`](Self::retry) before
/// another answer is accepted.
#[derive(Debug)]
pub struct InterviewSession {
    options: SessionOptions,
    state: State,
    turns: Vec<Turn>,
}

#[derive(Debug)]
enum State {
    NotStarted,
    Ongoing {
        position: String,
        question_type: QuestionType,
    },
}

impl InterviewSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            state: State::NotStarted,
            turns: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            State::NotStarted => SessionPhase::NotStarted,
            State::Ongoing { .. } => SessionPhase::Ongoing,
        }
    }

    /// Position as given to `start`; `None` before the interview starts.
    pub fn position(&self) -> Option<&str> {
        match &self.state {
            State::NotStarted => None,
            State::Ongoing { position, .. } => Some(position),
        }
    }

    pub fn question_type(&self) -> Option<QuestionType> {
        match self.state {
            State::NotStarted => None,
            State::Ongoing { question_type, .. } => Some(question_type),
        }
    }

    /// The full transcript, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of user answers that received a reply.
    pub fn answered(&self) -> usize {
        let users = self.turns.iter().filter(|t| t.role == TurnRole::User).count();
        if self.has_pending_answer() {
            users - 1
        } else {
            users
        }
    }

    /// True when the latest user answer has no assistant reply yet.
    pub fn has_pending_answer(&self) -> bool {
        matches!(self.turns.last(), Some(turn) if turn.role == TurnRole::User)
    }

    /// Content of the most recent assistant turn.
    pub fn latest_reply(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == TurnRole::Assistant)
            .map(|t| t.content.as_str())
    }

    /// Word-by-word replay of the most recent assistant turn.
    pub fn replay_latest(&self) -> Option<Replay> {
        self.latest_reply().map(replay)
    }

    /// Begin the interview and seed the opening line.
    ///
    /// Only allowed once. A second call is rejected and leaves the
    /// transcript untouched. The position is stored exactly as given;
    /// surrounding whitespace only matters for the blank check.
    pub fn start(
        &mut self,
        position: &str,
        question_type: QuestionType,
    ) -> Result<&Turn, InterviewError> {
        if !matches!(self.state, State::NotStarted) {
            return Err(InterviewError::validation(
                ValidationField::Phase,
                "interview already started",
            ));
        }
        if self.options.start_policy == StartPolicy::RequirePosition
            && position.trim().is_empty()
        {
            return Err(InterviewError::validation(
                ValidationField::Position,
                "position must not be empty",
            ));
        }

        self.state = State::Ongoing {
            position: position.to_string(),
            question_type,
        };
        self.turns.push(Turn::assistant(OPENING_LINE));

        info!(position = %position, question_type = %question_type, "interview started");
        Ok(&self.turns[0])
    }

    /// Record an answer, ask the provider for feedback and the next
    /// question, and return the reply.
    ///
    /// On provider failure the answer stays in the transcript and the error
    /// is returned; use [`retry`](Self::retry) to re-send it.
    pub async fn submit_answer<P: LlmProvider>(
        &mut self,
        provider: &P,
        answer: &str,
    ) -> Result<String, InterviewError> {
        if matches!(self.state, State::NotStarted) {
            return Err(not_started());
        }
        if answer.trim().is_empty() {
            return Err(InterviewError::validation(
                ValidationField::Answer,
                "answer must not be empty",
            ));
        }
        if self.has_pending_answer() {
            return Err(InterviewError::validation(
                ValidationField::Phase,
                "previous answer is still waiting for a reply; retry it first",
            ));
        }
        if let Some(cap) = self.options.max_turns {
            if self.answered() >= cap as usize {
                return Err(InterviewError::validation(
                    ValidationField::TurnLimit,
                    format!("interview is limited to {cap} answers"),
                ));
            }
        }

        self.turns.push(Turn::user(answer));
        self.complete_pending(provider).await
    }

    /// Re-send the pending answer after a failed completion.
    pub async fn retry<P: LlmProvider>(&mut self, provider: &P) -> Result<String, InterviewError> {
        if !self.has_pending_answer() {
            return Err(InterviewError::validation(
                ValidationField::Phase,
                "no answer is waiting for a reply",
            ));
        }
        debug!(turns = self.turns.len(), "retrying pending answer");
        self.complete_pending(provider).await
    }

    async fn complete_pending<P: LlmProvider>(
        &mut self,
        provider: &P,
    ) -> Result<String, InterviewError> {
        let State::Ongoing {
            position,
            question_type,
        } = &self.state
        else {
            return Err(not_started());
        };
        let prompt = InterviewPromptBuilder::build(position, *question_type, &self.turns);
        let mut request = CompletionRequest::from_prompt(prompt, &self.options.request);
        if let Some(system) = &self.options.system_prompt {
            request = request.with_system(system.clone());
        }

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            persona = "interview_coach",
            turns = self.turns.len(),
        );

        match provider.complete(&request).instrument(span).await {
            Ok(response) => {
                self.turns.push(Turn::assistant(response.content.clone()));
                debug!(
                    turns = self.turns.len(),
                    output_tokens = response.usage.output_tokens,
                    "interview reply recorded"
                );
                Ok(response.content)
            }
            Err(err) => {
                warn!(error = %err, turns = self.turns.len(), "interview completion failed");
                Err(InterviewError::Completion(err))
            }
        }
    }
}

fn not_started() -> InterviewError {
    InterviewError::validation(ValidationField::Phase, "interview has not started")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::stub::{StubProvider, StubReply};

    fn started(position: &str, question_type: QuestionType) -> InterviewSession {
        let mut session = InterviewSession::new(SessionOptions::default());
        session.start(position, question_type).unwrap();
        session
    }

    #[test]
    fn test_new_session_is_not_started() {
        let session = InterviewSession::new(SessionOptions::default());
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.turns().is_empty());
        assert!(session.latest_reply().is_none());
    }

    #[test]
    fn test_start_seeds_opening_line() {
        let session = started("Backend Engineer", QuestionType::Technical);
        assert_eq!(session.phase(), SessionPhase::Ongoing);
        assert_eq!(session.turns(), &[Turn::assistant(OPENING_LINE)]);
        assert_eq!(session.question_type(), Some(QuestionType::Technical));
    }

    #[test]
    fn test_start_rejects_blank_position() {
        let mut session = InterviewSession::new(SessionOptions::default());
        let err = session.start("", QuestionType::Technical).unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Validation { field: ValidationField::Position, .. }
        ));
        assert!(session.start("   ", QuestionType::Technical).is_err());
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.turns().is_empty());
    }

    #[test]
    fn test_permissive_policy_allows_blank_position() {
        let mut session = InterviewSession::new(SessionOptions {
            start_policy: StartPolicy::AllowBlankPosition,
            ..SessionOptions::default()
        });
        session.start("", QuestionType::Leadership).unwrap();
        assert_eq!(session.phase(), SessionPhase::Ongoing);
        assert_eq!(session.position(), Some(""));
        assert_eq!(session.question_type(), Some(QuestionType::Leadership));
    }

    #[test]
    fn test_unstarted_session_has_no_position() {
        let session = InterviewSession::new(SessionOptions::default());
        assert!(session.position().is_none());
        assert!(session.question_type().is_none());
    }

    #[tokio::test]
    async fn test_position_kept_verbatim_in_prompt() {
        let stub = StubProvider::replying(["Next?"]);
        let mut session = InterviewSession::new(SessionOptions {
            start_policy: StartPolicy::AllowBlankPosition,
            ..SessionOptions::default()
        });
        session.start("  Staff Engineer ", QuestionType::Technical).unwrap();
        assert_eq!(session.position(), Some("  Staff Engineer "));

        session.submit_answer(&stub, "ok").await.unwrap();
        assert!(stub.last_prompt().contains("  Staff Engineer "));
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut session = started("Designer", QuestionType::Behavioral);
        let err = session.start("Manager", QuestionType::Leadership).unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Validation { field: ValidationField::Phase, .. }
        ));
        assert_eq!(session.position(), Some("Designer"));
        assert_eq!(session.question_type(), Some(QuestionType::Behavioral));
        assert_eq!(session.turns().len(), 1);
    }

    #[tokio::test]
    async fn test_answer_before_start_is_rejected() {
        let stub = StubProvider::replying(["unused"]);
        let mut session = InterviewSession::new(SessionOptions::default());
        let err = session.submit_answer(&stub, "hello").await.unwrap_err();
        assert!(err.is_validation());
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_answer_leaves_turns_unchanged() {
        let stub = StubProvider::replying(["unused"]);
        let mut session = started("Analyst", QuestionType::Technical);
        let err = session.submit_answer(&stub, "  ").await.unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Validation { field: ValidationField::Answer, .. }
        ));
        assert_eq!(session.turns().len(), 1);
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_single_answer() {
        let stub = StubProvider::replying(["Great, tell me about a conflict."]);
        let mut session = started("Data Scientist", QuestionType::Behavioral);

        let reply = session
            .submit_answer(&stub, "I have five years of experience.")
            .await
            .unwrap();

        assert_eq!(reply, "Great, tell me about a conflict.");
        assert_eq!(
            session.turns(),
            &[
                Turn::assistant(OPENING_LINE),
                Turn::user("I have five years of experience."),
                Turn::assistant("Great, tell me about a conflict."),
            ]
        );

        let prompt = stub.last_prompt();
        assert!(prompt.contains("Data Scientist"));
        assert!(prompt.contains("Behavioral"));
        let seed = prompt.find(&format!("assistant: {OPENING_LINE}")).unwrap();
        let answer = prompt.find("user: I have five years of experience.").unwrap();
        assert!(seed < answer);
    }

    #[tokio::test]
    async fn test_each_answer_adds_two_turns() {
        let stub = StubProvider::replying(["Q2", "Q3", "Q4"]);
        let mut session = started("PM", QuestionType::Leadership);
        for (i, answer) in ["a1", "a2", "a3"].into_iter().enumerate() {
            session.submit_answer(&stub, answer).await.unwrap();
            assert_eq!(session.turns().len(), 1 + 2 * (i + 1));
        }
        assert_eq!(session.answered(), 3);

        let requests = stub.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|r| r.messages.len() == 1));
        // Later prompts carry the whole earlier transcript.
        let last = stub.last_prompt();
        for line in ["user: a1", "assistant: Q2", "user: a2", "assistant: Q3", "user: a3"] {
            assert!(last.contains(line), "missing {line}");
        }
    }

    #[tokio::test]
    async fn test_failed_completion_keeps_user_turn() {
        let stub = StubProvider::new([StubReply::Fail("connection refused".to_string())]);
        let mut session = started("QA", QuestionType::Technical);

        let err = session.submit_answer(&stub, "I write tests").await.unwrap_err();
        assert!(matches!(err, InterviewError::Completion(_)));
        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[1], Turn::user("I write tests"));
        assert!(session.has_pending_answer());
        assert_eq!(session.answered(), 0);
    }

    #[tokio::test]
    async fn test_retry_resends_pending_answer_once() {
        let stub = StubProvider::new([
            StubReply::Fail("boom".to_string()),
            StubReply::Text("Thanks. Next question?".to_string()),
        ]);
        let mut session = started("QA", QuestionType::Technical);
        assert!(session.submit_answer(&stub, "answer").await.is_err());

        let err = session.submit_answer(&stub, "another").await.unwrap_err();
        assert!(err.is_validation());

        let reply = session.retry(&stub).await.unwrap();
        assert_eq!(reply, "Thanks. Next question?");
        assert_eq!(session.turns().len(), 3);
        assert_eq!(
            session.turns().iter().filter(|t| t.role == TurnRole::User).count(),
            1
        );
        assert_eq!(stub.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_retry_without_pending_answer_is_rejected() {
        let stub = StubProvider::replying(["unused"]);
        let mut session = started("QA", QuestionType::Technical);
        assert!(session.retry(&stub).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_turn_limit_rejects_before_appending() {
        let stub = StubProvider::replying(["Q2", "Q3"]);
        let mut session = InterviewSession::new(SessionOptions {
            max_turns: Some(1),
            ..SessionOptions::default()
        });
        session.start("SRE", QuestionType::ProblemSolving).unwrap();
        session.submit_answer(&stub, "first").await.unwrap();

        let err = session.submit_answer(&stub, "second").await.unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Validation { field: ValidationField::TurnLimit, .. }
        ));
        assert_eq!(session.turns().len(), 3);
    }

    #[tokio::test]
    async fn test_replay_latest_uses_last_reply() {
        let stub = StubProvider::replying(["Nice.  Next?"]);
        let mut session = started("SRE", QuestionType::Technical);
        session.submit_answer(&stub, "ok").await.unwrap();
        let text: String = session.replay_latest().unwrap().collect();
        assert_eq!(text, "Nice. Next? \n");
    }

    #[tokio::test]
    async fn test_request_uses_session_settings() {
        let stub = StubProvider::replying(["fine"]);
        let mut session = InterviewSession::new(SessionOptions {
            request: RequestSettings {
                model: "llama3.2".to_string(),
                max_tokens: 300,
                temperature: Some(0.1),
            },
            ..SessionOptions::default()
        });
        session.start("SRE", QuestionType::Technical).unwrap();
        session.submit_answer(&stub, "ok").await.unwrap();
        let request = &stub.requests()[0];
        assert_eq!(request.model, "llama3.2");
        assert_eq!(request.max_tokens, 300);
        assert!(request.system.is_none());
    }

    #[tokio::test]
    async fn test_system_prompt_attached_when_configured() {
        let stub = StubProvider::replying(["fine"]);
        let options = SessionOptions::default().with_system_prompt("You are an interview coach.");
        let mut session = InterviewSession::new(options);
        session.start("SRE", QuestionType::Technical).unwrap();
        session.submit_answer(&stub, "ok").await.unwrap();
        let request = &stub.requests()[0];
        assert_eq!(request.system.as_deref(), Some("You are an interview coach."));
        assert_eq!(request.messages.len(), 1);
    }

    #[test]
    fn test_options_from_settings() {
        let interview = InterviewSettings {
            max_turns: Some(5),
            require_position: false,
        };
        let options = SessionOptions::from_settings(&ProviderSettings::default(), &interview);
        assert_eq!(options.start_policy, StartPolicy::AllowBlankPosition);
        assert_eq!(options.max_turns, Some(5));
        assert_eq!(options.request.model, "llama3.2");
    }
}
