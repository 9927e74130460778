//! Translation backends.
//!
//! Generation is deliberately pluggable: the pipeline hands the backend
//! the source text plus the semantic frame and takes back a draft with a
//! confidence estimate. Two backends ship with the crate — the tagging
//! placeholder the standalone mode has always produced, and a
//! deterministic glossary backend for tests and demos. A production
//! deployment would implement [`TranslationBackend`] against an external
//! MT service.

use rustc_hash::FxHashMap;

use crate::errors::TranslateError;
use crate::semantics::SemanticFrame;
use crate::types::TranslatorConfig;

/// Raw output of a translation backend, before post-processing.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendOutput {
    pub text: String,
    /// Backend self-estimate in `[0.0, 1.0]`.
    pub confidence: f64,
}

/// A source of target-language text.
pub trait TranslationBackend {
    /// Stable backend name for logs and error messages.
    fn name(&self) -> &'static str;

    /// Translate `text` into the configured target language.
    fn translate(
        &self,
        text: &str,
        frame: &SemanticFrame,
        cfg: &TranslatorConfig,
    ) -> Result<BackendOutput, TranslateError>;
}

impl TranslationBackend for Box<dyn TranslationBackend + Send + Sync> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn translate(
        &self,
        text: &str,
        frame: &SemanticFrame,
        cfg: &TranslatorConfig,
    ) -> Result<BackendOutput, TranslateError> {
        (**self).translate(text, frame, cfg)
    }
}

/// Boxed backend type used by the standard pipeline.
pub type DynBackend = Box<dyn TranslationBackend + Send + Sync>;

// ============================================================================
// PlaceholderBackend
// ============================================================================

/// The placeholder confidence reported for tagged pass-through output.
const PLACEHOLDER_CONFIDENCE: f64 = 0.92;

/// Tags the source text with the target language instead of translating.
///
/// Output shape: `[Translated to {lang}]: {text}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderBackend;

impl TranslationBackend for PlaceholderBackend {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn translate(
        &self,
        text: &str,
        _frame: &SemanticFrame,
        cfg: &TranslatorConfig,
    ) -> Result<BackendOutput, TranslateError> {
        Ok(BackendOutput {
            text: format!("[Translated to {}]: {}", cfg.target_lang, text),
            confidence: PLACEHOLDER_CONFIDENCE,
        })
    }
}

// ============================================================================
// GlossaryBackend
// ============================================================================

/// Deterministic phrase-glossary translation.
///
/// Greedy longest-match over word n-grams: at each position the longest
/// glossary entry wins; unmatched words pass through unchanged.
/// Confidence is the fraction of source words covered by matches.
#[derive(Debug, Clone, Default)]
pub struct GlossaryBackend {
    entries: FxHashMap<String, String>,
    /// Longest entry length in words, bounding the n-gram probe.
    max_ngram: usize,
}

impl GlossaryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend from `(source phrase, target phrase)` pairs.
    /// Source phrases are matched case-insensitively.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut backend = Self::new();
        for (source, target) in pairs {
            backend.insert(source, target);
        }
        backend
    }

    /// Add one glossary entry.
    pub fn insert(&mut self, source: &str, target: &str) {
        let key = source.to_lowercase();
        self.max_ngram = self.max_ngram.max(key.split_whitespace().count());
        self.entries.insert(key, target.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strip trailing clause punctuation for matching, returning the bare
    /// word and the stripped suffix.
    fn split_punct(word: &str) -> (&str, &str) {
        let bare = word.trim_end_matches(['.', ',', '?', '!', ';', ':']);
        (bare, &word[bare.len()..])
    }
}

impl TranslationBackend for GlossaryBackend {
    fn name(&self) -> &'static str {
        "glossary"
    }

    fn translate(
        &self,
        text: &str,
        _frame: &SemanticFrame,
        _cfg: &TranslatorConfig,
    ) -> Result<BackendOutput, TranslateError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Ok(BackendOutput {
                text: String::new(),
                confidence: 0.0,
            });
        }

        let mut out: Vec<String> = Vec::with_capacity(words.len());
        let mut matched_words = 0usize;
        let mut i = 0;

        while i < words.len() {
            let mut matched = false;

            for n in (1..=self.max_ngram.min(words.len() - i)).rev() {
                let span = &words[i..i + n];
                let (key, trailing) = ngram_key(span);
                if let Some(target) = self.entries.get(&key) {
                    out.push(format!("{target}{trailing}"));
                    matched_words += n;
                    i += n;
                    matched = true;
                    break;
                }
            }

            if !matched {
                out.push(words[i].to_string());
                i += 1;
            }
        }

        Ok(BackendOutput {
            text: out.join(" "),
            confidence: matched_words as f64 / words.len() as f64,
        })
    }
}

/// Lowercased n-gram key with the final word's trailing punctuation
/// stripped (and returned so it can be re-attached to the replacement).
fn ngram_key(span: &[&str]) -> (String, String) {
    let mut parts: Vec<String> = span.iter().map(|w| w.to_lowercase()).collect();
    let last = parts.last().cloned().unwrap_or_default();
    let (bare, trailing) = GlossaryBackend::split_punct(&last);
    if let Some(slot) = parts.last_mut() {
        *slot = bare.to_string();
    }
    (parts.join(" "), trailing.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SflAnalysis;
    use crate::semantics::SemanticFrame;

    fn frame() -> SemanticFrame {
        SemanticFrame::from_analysis(&SflAnalysis::empty(), &TranslatorConfig::default())
    }

    #[test]
    fn test_placeholder_output_shape() {
        let cfg = TranslatorConfig::new("en", "fr");
        let out = PlaceholderBackend
            .translate("The committee will review the proposal.", &frame(), &cfg)
            .unwrap();
        assert_eq!(
            out.text,
            "[Translated to fr]: The committee will review the proposal."
        );
        assert!((out.confidence - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn test_glossary_single_words() {
        let backend = GlossaryBackend::from_pairs(&[("committee", "Ausschuss"), ("the", "der")]);
        let cfg = TranslatorConfig::new("en", "de");
        let out = backend.translate("the committee", &frame(), &cfg).unwrap();
        assert_eq!(out.text, "der Ausschuss");
        assert!((out.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_glossary_longest_match_wins() {
        let backend = GlossaryBackend::from_pairs(&[
            ("next", "nächste"),
            ("next week", "nächste Woche"),
        ]);
        let cfg = TranslatorConfig::new("en", "de");
        let out = backend.translate("next week", &frame(), &cfg).unwrap();
        assert_eq!(out.text, "nächste Woche");
    }

    #[test]
    fn test_glossary_trailing_punct_reattached() {
        let backend = GlossaryBackend::from_pairs(&[("proposal", "Vorschlag")]);
        let cfg = TranslatorConfig::new("en", "de");
        let out = backend.translate("the proposal.", &frame(), &cfg).unwrap();
        assert_eq!(out.text, "the Vorschlag.");
    }

    #[test]
    fn test_glossary_unmatched_words_pass_through() {
        let backend = GlossaryBackend::from_pairs(&[("committee", "Ausschuss")]);
        let cfg = TranslatorConfig::new("en", "de");
        let out = backend
            .translate("the committee decided", &frame(), &cfg)
            .unwrap();
        assert_eq!(out.text, "the Ausschuss decided");
        assert!((out.confidence - (1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_glossary_case_insensitive() {
        let backend = GlossaryBackend::from_pairs(&[("The Committee", "der Ausschuss")]);
        let cfg = TranslatorConfig::new("en", "de");
        let out = backend.translate("the committee", &frame(), &cfg).unwrap();
        assert_eq!(out.text, "der Ausschuss");
    }

    #[test]
    fn test_glossary_empty_input() {
        let backend = GlossaryBackend::new();
        let cfg = TranslatorConfig::new("en", "de");
        let out = backend.translate("", &frame(), &cfg).unwrap();
        assert!(out.text.is_empty());
        assert_eq!(out.confidence, 0.0);
    }

    #[test]
    fn test_boxed_backend_delegates() {
        let boxed: DynBackend = Box::new(PlaceholderBackend);
        assert_eq!(boxed.name(), "placeholder");
        let cfg = TranslatorConfig::new("en", "ja");
        let out = boxed.translate("Hello.", &frame(), &cfg).unwrap();
        assert!(out.text.starts_with("[Translated to ja]:"));
    }
}
