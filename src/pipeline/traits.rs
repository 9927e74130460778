//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations
//! are statically dispatched; zero-sized defaults cost nothing. Concrete
//! defaults delegate to the domain modules (`analysis`, `semantics`,
//! `translate`) so stage plumbing stays free of linguistics.

use crate::analysis::{analyze_stream, SflAnalysis};
use crate::errors::TranslateError;
use crate::nlp::lexicon::MarkerLexicon;
use crate::pipeline::artifacts::{CheckOutcome, Draft, TokenStream, TranslationResult};
use crate::semantics::SemanticFrame;
use crate::translate::backend::TranslationBackend;
use crate::types::{SpeechFunction, TranslatorConfig};

// ============================================================================
// Preprocessor — optional token normalization (stage 0)
// ============================================================================

/// Optional preprocessing / normalization stage.
///
/// # Contract
///
/// - **Input**: a mutable [`TokenStream`] (modify in place).
/// - **Output**: none — the stream is mutated.
/// - **Idempotent**: preprocessing twice must equal preprocessing once.
pub trait Preprocessor {
    fn preprocess(&self, tokens: &mut TokenStream, cfg: &TranslatorConfig);
}

/// No-op preprocessor — the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    #[inline]
    fn preprocess(&self, _tokens: &mut TokenStream, _cfg: &TranslatorConfig) {
        // Intentionally empty.
    }
}

// ============================================================================
// FeatureExtractor — SFL analysis (stage 1)
// ============================================================================

/// Extracts the SFL analysis from the token stream.
///
/// Extraction is pure: implementations must not mutate the stream.
pub trait FeatureExtractor {
    fn extract(&self, tokens: &TokenStream, cfg: &TranslatorConfig) -> SflAnalysis;
}

/// Full clause-by-clause SFL extraction over the marker lexicon.
#[derive(Debug, Clone, Default)]
pub struct SflFeatureExtractor {
    lexicon: MarkerLexicon,
}

impl SflFeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor with a caller-supplied lexicon (domain terms, extra
    /// marker verbs).
    pub fn with_lexicon(lexicon: MarkerLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &MarkerLexicon {
        &self.lexicon
    }
}

impl FeatureExtractor for SflFeatureExtractor {
    fn extract(&self, tokens: &TokenStream, _cfg: &TranslatorConfig) -> SflAnalysis {
        analyze_stream(tokens, &self.lexicon)
    }
}

// ============================================================================
// SemanticMapper — cross-linguistic frame (stage 2)
// ============================================================================

/// Maps the source analysis onto the language-neutral semantic frame.
pub trait SemanticMapper {
    fn map(
        &self,
        tokens: &TokenStream,
        analysis: &SflAnalysis,
        cfg: &TranslatorConfig,
    ) -> SemanticFrame;
}

/// Default mapper: dominant-clause roles plus target-language
/// conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSemanticMapper;

impl SemanticMapper for DefaultSemanticMapper {
    fn map(
        &self,
        _tokens: &TokenStream,
        analysis: &SflAnalysis,
        cfg: &TranslatorConfig,
    ) -> SemanticFrame {
        SemanticFrame::from_analysis(analysis, cfg)
    }
}

// ============================================================================
// Generator — draft production (stage 3)
// ============================================================================

/// Produces a target-language draft from the source text and frame.
pub trait Generator {
    fn generate(
        &self,
        tokens: &TokenStream,
        frame: &SemanticFrame,
        cfg: &TranslatorConfig,
    ) -> Result<Draft, TranslateError>;
}

/// Generator backed by any [`TranslationBackend`].
#[derive(Debug, Clone, Default)]
pub struct BackendGenerator<B> {
    backend: B,
}

impl<B: TranslationBackend> BackendGenerator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: TranslationBackend> Generator for BackendGenerator<B> {
    fn generate(
        &self,
        tokens: &TokenStream,
        frame: &SemanticFrame,
        cfg: &TranslatorConfig,
    ) -> Result<Draft, TranslateError> {
        let output = self.backend.translate(tokens.source(), frame, cfg)?;
        Ok(Draft::new(output.text, output.confidence))
    }
}

// ============================================================================
// PostProcessor — register adaptation and localization (stages 4–5)
// ============================================================================

/// Rewrites a draft in place, recording edits in the draft's log.
pub trait PostProcessor {
    fn post_process(&self, draft: &mut Draft, frame: &SemanticFrame, cfg: &TranslatorConfig);
}

/// No-op post-processor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPostProcessor;

impl PostProcessor for NoopPostProcessor {
    #[inline]
    fn post_process(&self, _draft: &mut Draft, _frame: &SemanticFrame, _cfg: &TranslatorConfig) {
        // Intentionally empty.
    }
}

// ============================================================================
// OutputValidator — draft checks (stage 6)
// ============================================================================

/// Runs checks against the finished draft. Checks flag problems; they
/// never mutate the draft.
pub trait OutputValidator {
    fn validate(
        &self,
        draft: &Draft,
        frame: &SemanticFrame,
        cfg: &TranslatorConfig,
    ) -> Vec<CheckOutcome>;
}

/// The built-in draft checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardValidator;

impl OutputValidator for StandardValidator {
    fn validate(
        &self,
        draft: &Draft,
        frame: &SemanticFrame,
        _cfg: &TranslatorConfig,
    ) -> Vec<CheckOutcome> {
        let mut checks = Vec::with_capacity(3);

        if draft.text.trim().is_empty() {
            checks.push(CheckOutcome::fail("non_empty", "draft is empty"));
        } else {
            checks.push(CheckOutcome::pass("non_empty"));
        }

        // Questions must keep their interrogative punctuation.
        if frame.speech_function == SpeechFunction::Question {
            if draft.text.trim_end().ends_with(['?', '？']) {
                checks.push(CheckOutcome::pass("mood_punctuation"));
            } else {
                checks.push(CheckOutcome::fail(
                    "mood_punctuation",
                    "source is a question but the draft has no question mark",
                ));
            }
        }

        if draft.confidence >= 0.0 && draft.confidence <= 1.0 {
            checks.push(CheckOutcome::pass("confidence_range"));
        } else {
            checks.push(CheckOutcome::fail(
                "confidence_range",
                "backend confidence outside [0, 1]",
            ));
        }

        checks
    }
}

// ============================================================================
// ResultFormatter — public contract (stage 7)
// ============================================================================

/// Assembles the public [`TranslationResult`].
pub trait ResultFormatter {
    fn format(
        &self,
        draft: Draft,
        analysis: SflAnalysis,
        checks: Vec<CheckOutcome>,
        source_text: &str,
        cfg: &TranslatorConfig,
    ) -> TranslationResult;
}

/// Attaches the analysis only when the config asked for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormatter;

impl ResultFormatter for StandardFormatter {
    fn format(
        &self,
        draft: Draft,
        analysis: SflAnalysis,
        checks: Vec<CheckOutcome>,
        source_text: &str,
        cfg: &TranslatorConfig,
    ) -> TranslationResult {
        TranslationResult {
            translation: draft.text,
            source_text: source_text.to_string(),
            source_lang: cfg.source_lang.clone(),
            target_lang: cfg.target_lang.clone(),
            sfl_analysis: cfg.analyze.then_some(analysis),
            confidence: draft.confidence,
            checks,
            edits: draft.edits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;
    use crate::translate::backend::PlaceholderBackend;

    fn stream(text: &str) -> TokenStream {
        Tokenizer::new("en").tokenize(text)
    }

    #[test]
    fn test_noop_preprocessor_preserves_stream() {
        let mut tokens = stream("The committee will review the proposal.");
        let before = tokens.clone();
        NoopPreprocessor.preprocess(&mut tokens, &TranslatorConfig::default());
        assert_eq!(tokens, before);
    }

    #[test]
    fn test_custom_preprocessor_can_mark_stopwords() {
        struct MarkEverythingStopword;

        impl Preprocessor for MarkEverythingStopword {
            fn preprocess(&self, tokens: &mut TokenStream, _cfg: &TranslatorConfig) {
                for token in tokens.tokens_mut() {
                    token.is_stopword = true;
                }
            }
        }

        let mut tokens = stream("committee proposal");
        MarkEverythingStopword.preprocess(&mut tokens, &TranslatorConfig::default());
        assert!(tokens.tokens().iter().all(|t| t.is_stopword));
    }

    #[test]
    fn test_sfl_extractor_runs_analysis() {
        let tokens = stream("She said the meeting was postponed.");
        let analysis = SflFeatureExtractor::new().extract(&tokens, &TranslatorConfig::default());
        assert_eq!(analysis.process_type.as_str(), "verbal");
    }

    #[test]
    fn test_backend_generator_wraps_backend_output() {
        let tokens = stream("Hello.");
        let cfg = TranslatorConfig::new("en", "de");
        let analysis = SflFeatureExtractor::new().extract(&tokens, &cfg);
        let frame = DefaultSemanticMapper.map(&tokens, &analysis, &cfg);

        let draft = BackendGenerator::new(PlaceholderBackend)
            .generate(&tokens, &frame, &cfg)
            .unwrap();
        assert_eq!(draft.text, "[Translated to de]: Hello.");
        assert!(draft.edits.is_empty());
    }

    #[test]
    fn test_standard_validator_passes_clean_draft() {
        let tokens = stream("The plan works.");
        let cfg = TranslatorConfig::default();
        let analysis = SflFeatureExtractor::new().extract(&tokens, &cfg);
        let frame = DefaultSemanticMapper.map(&tokens, &analysis, &cfg);
        let draft = Draft::new("Le plan fonctionne.".to_string(), 0.9);

        let checks = StandardValidator.validate(&draft, &frame, &cfg);
        assert!(checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_standard_validator_flags_lost_question_mark() {
        let tokens = stream("Is the meeting on?");
        let cfg = TranslatorConfig::default();
        let analysis = SflFeatureExtractor::new().extract(&tokens, &cfg);
        let frame = DefaultSemanticMapper.map(&tokens, &analysis, &cfg);
        let draft = Draft::new("La réunion a lieu.".to_string(), 0.9);

        let checks = StandardValidator.validate(&draft, &frame, &cfg);
        let mood = checks.iter().find(|c| c.check == "mood_punctuation").unwrap();
        assert!(!mood.passed);
    }

    #[test]
    fn test_standard_validator_flags_empty_draft() {
        let tokens = stream("Anything.");
        let cfg = TranslatorConfig::default();
        let analysis = SflFeatureExtractor::new().extract(&tokens, &cfg);
        let frame = DefaultSemanticMapper.map(&tokens, &analysis, &cfg);
        let draft = Draft::new("   ".to_string(), 0.5);

        let checks = StandardValidator.validate(&draft, &frame, &cfg);
        let non_empty = checks.iter().find(|c| c.check == "non_empty").unwrap();
        assert!(!non_empty.passed);
    }

    #[test]
    fn test_formatter_attaches_analysis_only_on_request() {
        let cfg_plain = TranslatorConfig::new("en", "fr");
        let cfg_analyze = TranslatorConfig::new("en", "fr").with_analysis();
        let analysis = SflAnalysis::empty();
        let draft = Draft::new("Bonjour.".to_string(), 0.9);

        let plain = StandardFormatter.format(
            draft.clone(),
            analysis.clone(),
            Vec::new(),
            "Hello.",
            &cfg_plain,
        );
        assert!(plain.sfl_analysis.is_none());

        let with = StandardFormatter.format(draft, analysis, Vec::new(), "Hello.", &cfg_analyze);
        assert!(with.sfl_analysis.is_some());
        assert_eq!(with.source_text, "Hello.");
        assert_eq!(with.target_lang, "fr");
    }
}
