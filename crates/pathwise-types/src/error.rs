use std::fmt;

use thiserror::Error;

use crate::llm::LlmError;

/// Input or state that an interview operation refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    Position,
    Answer,
    /// Operation not allowed in the current session phase.
    Phase,
    /// The configured answer cap has been reached.
    TurnLimit,
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationField::Position => write!(f, "position"),
            ValidationField::Answer => write!(f, "answer"),
            ValidationField::Phase => write!(f, "phase"),
            ValidationField::TurnLimit => write!(f, "turn_limit"),
        }
    }
}

/// Errors from mock interview operations.
#[derive(Debug, Error)]
pub enum InterviewError {
    /// Rejected before any state changed.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: ValidationField,
        reason: String,
    },

    /// The completion provider failed; the pending answer stays recorded.
    #[error("completion failed: {0}")]
    Completion(#[from] LlmError),
}

impl InterviewError {
    pub fn validation(field: ValidationField, reason: impl Into<String>) -> Self {
        InterviewError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, InterviewError::Validation { .. })
    }
}

/// Errors from one-shot advisory flows and the coach chat.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("completion failed: {0}")]
    Completion(#[from] LlmError),
}

impl AdvisoryError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AdvisoryError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from repository operations (used by trait definitions in pathwise-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors from registration and login.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CredentialError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CredentialError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from turning an uploaded document into plain text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document format: '{0}'")]
    UnsupportedFormat(String),

    #[error("corrupt {format} document: {reason}")]
    Corrupt { format: String, reason: String },

    #[error("document contains no extractable text")]
    Empty,

    #[error("io error: {0}")]
    Io(String),
}

/// Errors from the web search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(String),

    #[error("search returned HTTP {0}")]
    Status(u16),

    #[error("could not parse search response: {0}")]
    Parse(String),
}

/// Errors while loading or validating the persona catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse persona catalog: {0}")]
    Parse(String),

    #[error("persona catalog is missing '{0}'")]
    MissingPersona(String),

    #[error("persona '{key}' is invalid: {reason}")]
    InvalidPersona { key: String, reason: String },

    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_validation_names_field() {
        let err = InterviewError::validation(ValidationField::Position, "must not be empty");
        assert_eq!(err.to_string(), "invalid position: must not be empty");
        assert!(err.is_validation());
    }

    #[test]
    fn test_interview_completion_from_llm_error() {
        let err: InterviewError = LlmError::EmptyResponse.into();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("empty response"));
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_credential_error_transparent_repository() {
        let err: CredentialError = RepositoryError::Conflict("username".to_string()).into();
        assert_eq!(err.to_string(), "conflict: username");
    }

    #[test]
    fn test_extraction_error_display() {
        let err = ExtractionError::Corrupt {
            format: "pdf".to_string(),
            reason: "bad xref".to_string(),
        };
        assert_eq!(err.to_string(), "corrupt pdf document: bad xref");
    }
}
