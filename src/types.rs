//! Core types shared across the translation pipeline.
//!
//! Languages are identified by lowercase ISO 639-1 codes (`"en"`, `"de"`,
//! `"ja"`, ...) throughout the crate; region qualifiers (`"MX"`, `"AT"`)
//! travel separately in [`TranslatorConfig::region`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Token
// ============================================================================

/// A single token produced by the tokenizer.
///
/// Offsets are byte offsets into the source text. `sentence_idx` and
/// `token_idx` are document-global (token indices do not reset per
/// sentence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appears in the source text.
    pub text: String,
    /// Lowercased form used for lexicon lookups.
    pub lemma: String,
    /// Byte offset of the first byte of the token.
    pub start: usize,
    /// Byte offset one past the last byte of the token.
    pub end: usize,
    /// Index of the sentence this token belongs to.
    pub sentence_idx: usize,
    /// Document-global token index.
    pub token_idx: usize,
    /// Whether the token is a stopword in the source language.
    pub is_stopword: bool,
    /// Whether the token is punctuation.
    pub is_punct: bool,
}

impl Token {
    /// Construct a non-stopword, non-punctuation token.
    pub fn new(
        text: &str,
        lemma: &str,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_string(),
            start,
            end,
            sentence_idx,
            token_idx,
            is_stopword: false,
            is_punct: false,
        }
    }

    /// Returns `true` for tokens that carry lexical content (not
    /// punctuation, not a stopword).
    pub fn is_content(&self) -> bool {
        !self.is_punct && !self.is_stopword
    }
}

// ============================================================================
// SFL category enums
// ============================================================================

/// The six process types of the SFL transitivity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    /// Doing and happening: *build*, *create*, *review*.
    Material,
    /// Sensing: *think*, *believe*, *feel*.
    Mental,
    /// Being and having: copular clauses, attribution.
    Relational,
    /// Saying: *say*, *announce*, *ask*.
    Verbal,
    /// Physiological and psychological behavior: *laugh*, *watch*.
    Behavioral,
    /// Existence: *there is*, *there are*.
    Existential,
}

impl ProcessType {
    /// User-facing name used in JSON output and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Mental => "mental",
            Self::Relational => "relational",
            Self::Verbal => "verbal",
            Self::Behavioral => "behavioral",
            Self::Existential => "existential",
        }
    }

    /// Detection precedence: lower ranks win ties between clause counts.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Self::Verbal => 0,
            Self::Mental => 1,
            Self::Material => 2,
            Self::Behavioral => 3,
            Self::Existential => 4,
            Self::Relational => 5,
        }
    }
}

/// Clause mood, detected from punctuation and clause shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Declarative,
    Interrogative,
    Imperative,
    Exclamative,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declarative => "declarative",
            Self::Interrogative => "interrogative",
            Self::Imperative => "imperative",
            Self::Exclamative => "exclamative",
        }
    }
}

/// Speech function realized by a mood choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechFunction {
    Statement,
    Question,
    Command,
    Exclamation,
}

impl From<Mood> for SpeechFunction {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Declarative => Self::Statement,
            Mood::Interrogative => Self::Question,
            Mood::Imperative => Self::Command,
            Mood::Exclamative => Self::Exclamation,
        }
    }
}

/// Target register requested for a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Register {
    Formal,
    Informal,
    Academic,
    BusinessFormal,
    Conversational,
    Technical,
}

impl Register {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Academic => "academic",
            Self::BusinessFormal => "business-formal",
            Self::Conversational => "conversational",
            Self::Technical => "technical",
        }
    }

    /// Whether this register calls for formal lexicogrammar (full forms,
    /// no contractions).
    pub fn is_formal(&self) -> bool {
        matches!(
            self,
            Self::Formal | Self::Academic | Self::BusinessFormal | Self::Technical
        )
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "formal" => Some(Self::Formal),
            "informal" => Some(Self::Informal),
            "academic" => Some(Self::Academic),
            "business-formal" | "business_formal" | "business" => Some(Self::BusinessFormal),
            "conversational" => Some(Self::Conversational),
            "technical" => Some(Self::Technical),
            _ => None,
        }
    }
}

impl std::str::FromStr for Register {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Register::parse(value).ok_or_else(|| format!("unknown register \"{value}\""))
    }
}

/// Halliday's three-way modality value scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalityDegree {
    /// *can*, *may*, *might*, *could*
    Low,
    /// *will*, *would*, *should*
    Median,
    /// *must*, *ought*, *need*
    High,
}

// ============================================================================
// TranslatorConfig
// ============================================================================

/// Configuration threaded through every pipeline stage.
///
/// Defaults follow the standalone translator example: English source,
/// French target, register preserved, no cultural adaptation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// ISO 639-1 source language code.
    pub source_lang: String,
    /// ISO 639-1 target language code.
    pub target_lang: String,
    /// Target register, if the caller requests a specific one.
    pub register: Option<Register>,
    /// When `true`, the register adapter shifts the draft toward the
    /// configured register.
    pub preserve_register: bool,
    /// When `true`, the cultural localizer substitutes region-appropriate
    /// idioms into the draft.
    pub cultural_adaptation: bool,
    /// Region qualifier for localization (e.g., `"MX"`).
    pub region: Option<String>,
    /// When `true`, the formatted result carries the full SFL analysis.
    pub analyze: bool,
    /// Reject inputs with more tokens than this before running stages.
    pub max_tokens: Option<usize>,
    /// Reject inputs with more sentences than this before running stages.
    pub max_sentences: Option<usize>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_lang: "en".to_string(),
            target_lang: "fr".to_string(),
            register: None,
            preserve_register: true,
            cultural_adaptation: false,
            region: None,
            analyze: false,
            max_tokens: None,
            max_sentences: None,
        }
    }
}

impl TranslatorConfig {
    /// Config for a source/target language pair with all other fields at
    /// their defaults.
    pub fn new(source_lang: &str, target_lang: &str) -> Self {
        Self {
            source_lang: source_lang.to_lowercase(),
            target_lang: target_lang.to_lowercase(),
            ..Self::default()
        }
    }

    /// Set the target register.
    pub fn with_register(mut self, register: Register) -> Self {
        self.register = Some(register);
        self
    }

    /// Enable cultural localization for the given region.
    pub fn with_localization(mut self, region: &str) -> Self {
        self.cultural_adaptation = true;
        self.region = Some(region.to_uppercase());
        self
    }

    /// Attach the SFL analysis to translation results.
    pub fn with_analysis(mut self) -> Self {
        self.analyze = true;
        self
    }

    /// Set the maximum number of input tokens.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the maximum number of input sentences.
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = Some(max_sentences);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_content() {
        let mut token = Token::new("committee", "committee", 0, 9, 0, 0);
        assert!(token.is_content());
        token.is_stopword = true;
        assert!(!token.is_content());
    }

    #[test]
    fn test_process_type_serde_snake_case() {
        let json = serde_json::to_string(&ProcessType::Verbal).unwrap();
        assert_eq!(json, "\"verbal\"");
        let back: ProcessType = serde_json::from_str("\"existential\"").unwrap();
        assert_eq!(back, ProcessType::Existential);
    }

    #[test]
    fn test_register_kebab_case_roundtrip() {
        let json = serde_json::to_string(&Register::BusinessFormal).unwrap();
        assert_eq!(json, "\"business-formal\"");
        let back: Register = serde_json::from_str("\"business-formal\"").unwrap();
        assert_eq!(back, Register::BusinessFormal);
    }

    #[test]
    fn test_register_parse_accepts_underscore_variant() {
        let register: Register = "business_formal".parse().unwrap();
        assert_eq!(register, Register::BusinessFormal);
        assert!("medieval".parse::<Register>().is_err());
    }

    #[test]
    fn test_register_formality() {
        assert!(Register::Academic.is_formal());
        assert!(Register::BusinessFormal.is_formal());
        assert!(!Register::Conversational.is_formal());
        assert!(!Register::Informal.is_formal());
    }

    #[test]
    fn test_speech_function_from_mood() {
        assert_eq!(
            SpeechFunction::from(Mood::Interrogative),
            SpeechFunction::Question
        );
        assert_eq!(SpeechFunction::from(Mood::Imperative), SpeechFunction::Command);
    }

    #[test]
    fn test_config_builder_normalizes_codes() {
        let cfg = TranslatorConfig::new("EN", "De").with_localization("mx");
        assert_eq!(cfg.source_lang, "en");
        assert_eq!(cfg.target_lang, "de");
        assert!(cfg.cultural_adaptation);
        assert_eq!(cfg.region.as_deref(), Some("MX"));
    }

    #[test]
    fn test_config_default_pair() {
        let cfg = TranslatorConfig::default();
        assert_eq!(cfg.source_lang, "en");
        assert_eq!(cfg.target_lang, "fr");
        assert!(cfg.preserve_register);
        assert!(!cfg.cultural_adaptation);
        assert!(!cfg.analyze);
    }
}
