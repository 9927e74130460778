//! Pipeline specification types.
//!
//! A [`TranslationSpec`] describes which generator and post-processing
//! modules to use, their options, runtime execution limits, and
//! strictness settings. These types are the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "preset": "standard",
//!   "modules": {
//!     "generator": "glossary",
//!     "post": ["register_adapter", "cultural_localizer"]
//!   },
//!   "options": {
//!     "register": "formal",
//!     "region": "MX",
//!     "glossary": { "hello": "hola" }
//!   },
//!   "runtime": { "max_tokens": 10000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level translation pipeline specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Optional preset name used as a starting point (e.g., `"standard"`).
    #[serde(default)]
    pub preset: Option<String>,

    /// Explicit module selections. Omitted modules inherit defaults.
    #[serde(default)]
    pub modules: ModuleSet,

    /// Module options (register, region, glossary entries).
    #[serde(default)]
    pub options: OptionSet,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// The set of modules selected for the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleSet {
    #[serde(default)]
    pub generator: Option<GeneratorModuleType>,

    /// Post-processing modules, applied in the standard stage order
    /// regardless of listing order.
    #[serde(default)]
    pub post: Vec<PostModuleType>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

// ─── Module type enums ──────────────────────────────────────────────────────

/// Draft generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorModuleType {
    /// Marked passthrough output (the default).
    Placeholder,
    /// Longest-match phrase substitution from a user glossary.
    Glossary,
}

impl GeneratorModuleType {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Glossary => "glossary",
        }
    }
}

/// Post-processing modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostModuleType {
    /// Contraction expansion/contraction toward the target register.
    RegisterAdapter,
    /// Region-aware idiom substitution.
    CulturalLocalizer,
}

impl PostModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegisterAdapter => "register_adapter",
            Self::CulturalLocalizer => "cultural_localizer",
        }
    }
}

/// Options consumed by the selected modules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionSet {
    /// Target register name (e.g., `"formal"`, `"business-formal"`).
    #[serde(default)]
    pub register: Option<String>,

    /// Target region code for localization (e.g., `"MX"`).
    #[serde(default)]
    pub region: Option<String>,

    /// Source-phrase to target-phrase entries for the glossary generator.
    #[serde(default)]
    pub glossary: HashMap<String, String>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum number of input tokens before rejecting.
    #[serde(default)]
    pub max_tokens: Option<usize>,

    /// Maximum number of input sentences before rejecting.
    #[serde(default)]
    pub max_sentences: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
