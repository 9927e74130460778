//! Stable machine-readable error codes for spec validation.

use serde::{Deserialize, Serialize};

/// Category of a spec validation failure.
///
/// Codes are stable identifiers for programmatic handling; messages and
/// hints are free to change between releases, codes are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A field the schema does not recognize.
    UnknownField,
    /// A module requires an option that was not provided.
    MissingOption,
    /// Selected modules or options contradict each other.
    InvalidCombo,
    /// A runtime limit is out of its accepted range.
    LimitExceeded,
    /// Catch-all for custom rules.
    ValidationFailed,
}

impl ErrorCode {
    /// The snake_case name used in JSON output and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownField => "unknown_field",
            Self::MissingOption => "missing_option",
            Self::InvalidCombo => "invalid_combo",
            Self::LimitExceeded => "limit_exceeded",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
