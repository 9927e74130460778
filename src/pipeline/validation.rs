//! Validation engine for translation specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`TranslationSpec`](super::spec::TranslationSpec) and collects every
//! diagnostic into a [`ValidationReport`] — it never short-circuits on the
//! first error, so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sfl_translate::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::str::FromStr;

use serde::Serialize;

use crate::types::Register;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to a
/// [`SpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`TranslationSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"localizer_region"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &TranslationSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`TranslationSpec`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(LocalizerRegionRule));
        engine.add_rule(Box::new(RegisterAdapterRule));
        engine.add_rule(Box::new(GlossaryEntriesRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &TranslationSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. cultural_localizer requires a region ────────────────────────────────

struct LocalizerRegionRule;

impl ValidationRule for LocalizerRegionRule {
    fn name(&self) -> &str {
        "localizer_region"
    }

    fn validate(&self, spec: &TranslationSpec) -> Vec<ValidationDiagnostic> {
        let wants_localizer = spec
            .modules
            .post
            .contains(&PostModuleType::CulturalLocalizer);

        if wants_localizer && spec.options.region.is_none() {
            vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::MissingOption,
                    "/options/region",
                    "cultural_localizer requires a target region",
                )
                .with_hint("Set options.region to a region code, e.g. \"MX\""),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 2. register_adapter requires a recognized register ─────────────────────

struct RegisterAdapterRule;

impl ValidationRule for RegisterAdapterRule {
    fn name(&self) -> &str {
        "register_adapter"
    }

    fn validate(&self, spec: &TranslationSpec) -> Vec<ValidationDiagnostic> {
        if !spec.modules.post.contains(&PostModuleType::RegisterAdapter) {
            return vec![];
        }

        match spec.options.register.as_deref() {
            None => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::MissingOption,
                    "/options/register",
                    "register_adapter requires a target register",
                )
                .with_hint(
                    "Set options.register: formal, informal, academic, \
                     business-formal, conversational, or technical",
                ),
            )],
            Some(name) if Register::from_str(name).is_err() => {
                vec![ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidCombo,
                        "/options/register",
                        format!("unrecognized register \"{name}\""),
                    )
                    .with_hint(
                        "Use one of: formal, informal, academic, \
                         business-formal, conversational, technical",
                    ),
                )]
            }
            Some(_) => vec![],
        }
    }
}

// ─── 3. glossary generator requires glossary entries ────────────────────────

struct GlossaryEntriesRule;

impl ValidationRule for GlossaryEntriesRule {
    fn name(&self) -> &str {
        "glossary_entries"
    }

    fn validate(&self, spec: &TranslationSpec) -> Vec<ValidationDiagnostic> {
        let is_glossary = spec.modules.generator == Some(GeneratorModuleType::Glossary);

        if is_glossary && spec.options.glossary.is_empty() {
            vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::MissingOption,
                    "/options/glossary",
                    "glossary generator requires at least one glossary entry",
                )
                .with_hint("Add entries to options.glossary, or use the placeholder generator"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 4. Runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, spec: &TranslationSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let checks: &[(&str, Option<usize>)] = &[
            ("max_tokens", spec.runtime.max_tokens),
            ("max_sentences", spec.runtime.max_sentences),
        ];

        for &(field, value) in checks {
            if value == Some(0) {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::LimitExceeded,
                        format!("/runtime/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!(
                        "Remove {field} to disable the limit, or set it to a positive value"
                    )),
                ));
            }
        }

        out
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        unknowns
            .keys()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &TranslationSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/modules",
            &spec.modules.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/options",
            &spec.options.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/runtime",
            &spec.runtime.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
