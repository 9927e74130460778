//! Structured spec validation errors.

use serde::Serialize;

use super::error_code::ErrorCode;

/// A single problem found in a [`TranslationSpec`](super::spec::TranslationSpec).
///
/// Carries a stable [`ErrorCode`], a JSON-pointer-style `path` to the
/// offending field, a human-readable message, and an optional hint with
/// the suggested fix.
#[derive(Debug, Clone, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON-pointer-style location, e.g. `"/options/region"`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(
        code: ErrorCode,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hint() {
        let err = SpecError::new(
            ErrorCode::MissingOption,
            "/options/region",
            "cultural_localizer requires a region",
        )
        .with_hint("Set options.region, e.g. \"MX\"");
        let s = err.to_string();
        assert!(s.contains("[missing_option]"));
        assert!(s.contains("/options/region"));
        assert!(s.contains("hint:"));
    }

    #[test]
    fn test_serialize_omits_absent_hint() {
        let err = SpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());
    }
}
