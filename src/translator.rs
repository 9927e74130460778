//! High-level translator facade.
//!
//! [`SflTranslator`] bundles a tokenizer, a configuration, and the
//! standard pipeline behind a small API: build once, then call
//! [`translate`](SflTranslator::translate) per text. Construction is
//! either programmatic (builder methods) or data-driven via a JSON
//! [`TranslationSpec`] validated up front.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sfl_translate::translator::SflTranslator;
//!
//! let translator = SflTranslator::new("en", "es").with_localization("MX");
//! let result = translator.translate("It was raining cats and dogs.")?;
//! println!("{}", result.translation);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::analysis::SflAnalysis;
use crate::errors::TranslateError;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::StandardPipeline;
use crate::pipeline::spec::{GeneratorModuleType, PostModuleType, TranslationSpec};
use crate::pipeline::traits::FeatureExtractor;
use crate::pipeline::validation::ValidationEngine;
use crate::pipeline::TranslationResult;
use crate::translate::backend::{DynBackend, GlossaryBackend, PlaceholderBackend};
use crate::types::{Register, TranslatorConfig};

/// Per-call overrides applied on top of the translator's configuration.
///
/// `None` fields inherit from the configured value.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    pub register: Option<Register>,
    pub region: Option<String>,
    pub preserve_register: Option<bool>,
    pub cultural_adaptation: Option<bool>,
    pub analyze: Option<bool>,
}

/// SFL-guided translator for one language pair.
pub struct SflTranslator {
    config: TranslatorConfig,
    tokenizer: Tokenizer,
    pipeline: StandardPipeline,
}

// The boxed backend has no Debug bound; show the configuration only.
impl fmt::Debug for SflTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SflTranslator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SflTranslator {
    /// Translator for a source/target pair using the placeholder backend.
    pub fn new(source_lang: &str, target_lang: &str) -> Self {
        let config = TranslatorConfig::new(source_lang, target_lang);
        let tokenizer = Tokenizer::new(&config.source_lang);
        Self {
            pipeline: StandardPipeline::standard(Box::new(PlaceholderBackend)),
            config,
            tokenizer,
        }
    }

    /// Set the target register.
    pub fn with_register(mut self, register: Register) -> Self {
        self.config = self.config.with_register(register);
        self
    }

    /// Enable cultural localization for the given region.
    pub fn with_localization(mut self, region: &str) -> Self {
        self.config = self.config.with_localization(region);
        self
    }

    /// Attach the full SFL analysis to every result.
    pub fn with_analysis(mut self) -> Self {
        self.config = self.config.with_analysis();
        self
    }

    /// Swap the generation backend.
    pub fn with_backend(mut self, backend: DynBackend) -> Self {
        self.pipeline = StandardPipeline::standard(backend);
        self
    }

    /// Use a glossary backend built from `(source, target)` phrase pairs.
    pub fn with_glossary(self, pairs: &[(&str, &str)]) -> Self {
        self.with_backend(Box::new(GlossaryBackend::from_pairs(pairs)))
    }

    /// Build a translator from a validated [`TranslationSpec`].
    ///
    /// The spec is checked by the default [`ValidationEngine`] first; any
    /// error-severity diagnostic aborts construction with
    /// [`TranslateError::InvalidSpec`] carrying all of them.
    pub fn from_spec(
        source_lang: &str,
        target_lang: &str,
        spec: &TranslationSpec,
    ) -> Result<Self, TranslateError> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(TranslateError::InvalidSpec(
                report.errors().cloned().collect(),
            ));
        }

        let mut translator = Self::new(source_lang, target_lang);

        if spec.modules.post.contains(&PostModuleType::RegisterAdapter) {
            // Presence and spelling were checked by the validation rules.
            if let Some(name) = spec.options.register.as_deref() {
                if let Ok(register) = Register::from_str(name) {
                    translator = translator.with_register(register);
                }
            }
        }

        if spec.modules.post.contains(&PostModuleType::CulturalLocalizer) {
            if let Some(region) = spec.options.region.as_deref() {
                translator = translator.with_localization(region);
            }
        }

        if spec.modules.generator == Some(GeneratorModuleType::Glossary) {
            let mut backend = GlossaryBackend::new();
            for (source, target) in &spec.options.glossary {
                backend.insert(source, target);
            }
            translator = translator.with_backend(Box::new(backend));
        }

        if let Some(max_tokens) = spec.runtime.max_tokens {
            translator.config = translator.config.with_max_tokens(max_tokens);
        }
        if let Some(max_sentences) = spec.runtime.max_sentences {
            translator.config = translator.config.with_max_sentences(max_sentences);
        }

        Ok(translator)
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate `text` with the configured settings.
    pub fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        self.translate_observed(text, &mut NoopObserver)
    }

    /// Translate `text` with per-call option overrides.
    pub fn translate_with(
        &self,
        text: &str,
        options: &TranslateOptions,
    ) -> Result<TranslationResult, TranslateError> {
        let mut cfg = self.config.clone();
        if let Some(register) = options.register {
            cfg.register = Some(register);
        }
        if let Some(region) = &options.region {
            cfg.cultural_adaptation = true;
            cfg.region = Some(region.to_uppercase());
        }
        if let Some(preserve) = options.preserve_register {
            cfg.preserve_register = preserve;
        }
        if let Some(adapt) = options.cultural_adaptation {
            cfg.cultural_adaptation = adapt;
        }
        if let Some(analyze) = options.analyze {
            cfg.analyze = analyze;
        }

        let tokens = self.tokenizer.tokenize(text);
        self.pipeline.run(tokens, &cfg, &mut NoopObserver)
    }

    /// Translate `text`, notifying `observer` at each stage boundary.
    pub fn translate_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<TranslationResult, TranslateError> {
        let tokens = self.tokenizer.tokenize(text);
        self.pipeline.run(tokens, &self.config, observer)
    }

    /// Run the SFL analysis alone, without translating.
    pub fn analyze(&self, text: &str) -> SflAnalysis {
        let tokens = self.tokenizer.tokenize(text);
        self.pipeline.extractor.extract(&tokens, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::StageTimingObserver;

    #[test]
    fn test_translate_placeholder() {
        let translator = SflTranslator::new("en", "fr");
        let result = translator.translate("Hello world.").unwrap();
        assert_eq!(result.translation, "[Translated to fr]: Hello world.");
        assert_eq!(result.source_lang, "en");
        assert_eq!(result.target_lang, "fr");
        assert!(result.sfl_analysis.is_none());
    }

    #[test]
    fn test_translate_with_analysis() {
        let translator = SflTranslator::new("en", "fr").with_analysis();
        let result = translator
            .translate("The committee will review the proposal next week.")
            .unwrap();
        let analysis = result.sfl_analysis.unwrap();
        assert_eq!(analysis.process_type.as_str(), "material");
        assert_eq!(analysis.mood.as_str(), "declarative");
    }

    #[test]
    fn test_translate_formal_register() {
        let translator = SflTranslator::new("en", "de").with_register(Register::Formal);
        let result = translator.translate("We don't accept the terms.").unwrap();
        assert!(result.translation.contains("do not"));
        assert_eq!(result.edits.len(), 1);
    }

    #[test]
    fn test_translate_with_localization() {
        let translator = SflTranslator::new("en", "es").with_localization("MX");
        let result = translator
            .translate("That exam was a piece of cake.")
            .unwrap();
        assert!(result.translation.contains("pan comido, facilísimo"));
    }

    #[test]
    fn test_translate_with_glossary() {
        let translator = SflTranslator::new("en", "de")
            .with_glossary(&[("committee", "Ausschuss"), ("proposal", "Vorschlag")]);
        let result = translator.translate("the committee proposal").unwrap();
        assert_eq!(result.translation, "the Ausschuss Vorschlag");
        assert!((result.confidence - (2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_translate_with_per_call_overrides() {
        let translator = SflTranslator::new("en", "de");
        let options = TranslateOptions {
            register: Some(Register::Formal),
            analyze: Some(true),
            ..Default::default()
        };
        let result = translator
            .translate_with("We don't accept.", &options)
            .unwrap();
        assert!(result.translation.contains("do not"));
        assert!(result.sfl_analysis.is_some());
        // The base translator is unchanged.
        let plain = translator.translate("We don't accept.").unwrap();
        assert!(plain.translation.contains("don't"));
    }

    #[test]
    fn test_translate_observed_reports_stages() {
        let translator = SflTranslator::new("en", "fr");
        let mut obs = StageTimingObserver::new();
        let _result = translator.translate_observed("Hello.", &mut obs).unwrap();
        assert_eq!(obs.reports().len(), 8);
    }

    #[test]
    fn test_analyze_only() {
        let translator = SflTranslator::new("en", "fr");
        let analysis = translator.analyze("She said the meeting was postponed.");
        assert_eq!(analysis.process_type.as_str(), "verbal");
        assert_eq!(analysis.clauses.len(), 1);
    }

    #[test]
    fn test_from_spec_full() {
        let spec: TranslationSpec = serde_json::from_str(
            r#"{
                "v": 1,
                "modules": {
                    "generator": "glossary",
                    "post": ["register_adapter", "cultural_localizer"]
                },
                "options": {
                    "register": "formal",
                    "region": "MX",
                    "glossary": { "hello": "hola" }
                },
                "runtime": { "max_tokens": 100 }
            }"#,
        )
        .unwrap();

        let translator = SflTranslator::from_spec("en", "es", &spec).unwrap();
        assert_eq!(translator.config().register, Some(Register::Formal));
        assert_eq!(translator.config().region.as_deref(), Some("MX"));
        assert_eq!(translator.config().max_tokens, Some(100));

        let result = translator.translate("hello friend").unwrap();
        assert!(result.translation.starts_with("hola"));
    }

    #[test]
    fn test_from_spec_invalid_collects_all_errors() {
        let spec: TranslationSpec = serde_json::from_str(
            r#"{
                "v": 1,
                "modules": {
                    "generator": "glossary",
                    "post": ["cultural_localizer"]
                }
            }"#,
        )
        .unwrap();

        let err = SflTranslator::from_spec("en", "es", &spec).unwrap_err();
        match err {
            TranslateError::InvalidSpec(errors) => {
                // Missing region and missing glossary entries.
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected InvalidSpec, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_shows_config() {
        let translator = SflTranslator::new("en", "fr");
        let rendered = format!("{translator:?}");
        assert!(rendered.contains("SflTranslator"));
        assert!(rendered.contains("\"fr\""));
    }

    #[test]
    fn test_limit_exceeded_propagates() {
        let spec: TranslationSpec = serde_json::from_str(
            r#"{ "v": 1, "runtime": { "max_tokens": 2 } }"#,
        )
        .unwrap();
        let translator = SflTranslator::from_spec("en", "fr", &spec).unwrap();
        let err = translator.translate("one two three four five").unwrap_err();
        assert!(matches!(err, TranslateError::LimitExceeded { .. }));
    }
}
