//! Crate-level error type for fallible translation operations.
//!
//! Spec-validation diagnostics have their own structured representation in
//! [`crate::pipeline::errors::SpecError`]; this enum is the boundary type
//! returned by the translator facade and the agent.

use thiserror::Error;

use crate::pipeline::errors::SpecError;

/// Errors surfaced by the translator facade, the pipeline runner, and the
/// agent.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The agent was asked to translate a language outside its supported set.
    #[error("language \"{0}\" is not supported by this agent")]
    UnsupportedLanguage(String),

    /// The agent received work while stopped.
    #[error("agent \"{0}\" is not running; call start() first")]
    AgentStopped(String),

    /// A runtime limit configured on the translator was exceeded.
    #[error("input exceeds {limit_name} limit: {actual} > {limit}")]
    LimitExceeded {
        limit_name: &'static str,
        limit: usize,
        actual: usize,
    },

    /// The translation backend failed to produce a draft.
    #[error("translation backend \"{backend}\" failed: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    /// A translation spec failed validation; all error-severity diagnostics
    /// are attached.
    #[error("spec validation failed with {} error(s)", .0.len())]
    InvalidSpec(Vec<SpecError>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::error_code::ErrorCode;

    #[test]
    fn test_unsupported_language_display() {
        let err = TranslateError::UnsupportedLanguage("xx".to_string());
        assert_eq!(err.to_string(), "language \"xx\" is not supported by this agent");
    }

    #[test]
    fn test_limit_exceeded_display() {
        let err = TranslateError::LimitExceeded {
            limit_name: "max_tokens",
            limit: 10,
            actual: 42,
        };
        assert_eq!(err.to_string(), "input exceeds max_tokens limit: 42 > 10");
    }

    #[test]
    fn test_invalid_spec_counts_errors() {
        let err = TranslateError::InvalidSpec(vec![
            SpecError::new(ErrorCode::MissingOption, "/options/region", "region required"),
            SpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field"),
        ]);
        assert_eq!(err.to_string(), "spec validation failed with 2 error(s)");
    }
}
