//! Boundary errors for preference parsing.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A required preference field was absent or blank.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("no rule for event type `{value}`{}", hint(.suggestion))]
    UnknownEventType {
        value: String,
        suggestion: Option<String>,
    },

    #[error("no style table for mood `{value}`{}", hint(.suggestion))]
    UnknownMood {
        value: String,
        suggestion: Option<String>,
    },

    #[error("unknown season `{value}`")]
    UnknownSeason { value: String },
}

impl EngineError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::MissingField(_) => "missing_field",
            EngineError::UnknownEventType { .. } => "unknown_event_type",
            EngineError::UnknownMood { .. } => "unknown_mood",
            EngineError::UnknownSeason { .. } => "unknown_season",
        }
    }
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean `{s}`?)"),
        None => String::new(),
    }
}
