//! Mock interview types: turns, question categories, and session phase.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who authored a turn in an interview transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Literal name used when the transcript is rendered into a prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role-tagged message in an interview transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Category of questions the interviewer focuses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Leadership,
    ProblemSolving,
}

impl QuestionType {
    /// Every question type, in menu order.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Technical,
        QuestionType::Behavioral,
        QuestionType::Leadership,
        QuestionType::ProblemSolving,
    ];

    /// Human-facing label, also used verbatim inside interview prompts.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Technical => "Technical",
            QuestionType::Behavioral => "Behavioral",
            QuestionType::Leadership => "Leadership",
            QuestionType::ProblemSolving => "Problem Solving",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "technical" => Ok(QuestionType::Technical),
            "behavioral" | "behavioural" => Ok(QuestionType::Behavioral),
            "leadership" => Ok(QuestionType::Leadership),
            "problemsolving" => Ok(QuestionType::ProblemSolving),
            _ => Err(format!("invalid question type: '{s}'")),
        }
    }
}

/// Coarse lifecycle state of an interview session.
///
/// There is no terminal state: an ongoing interview lasts until its owner
/// drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Ongoing,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::NotStarted => write!(f, "not_started"),
            SessionPhase::Ongoing => write!(f, "ongoing"),
        }
    }
}
