//! Translation agent — lifecycle wrapper around the translator.
//!
//! An agent owns a set of supported languages and a running flag, checks
//! both before doing work, and can fan batches out across threads with
//! `rayon`. "Orchestrated" agents are driven by an external coordinator
//! through the completion callback; "standalone" agents are called
//! directly.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::errors::TranslateError;
use crate::pipeline::TranslationResult;
use crate::translator::SflTranslator;

/// How the agent is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentMode {
    /// Driven by an external coordinator via the completion callback.
    Orchestrated,
    /// Called directly by application code.
    #[default]
    Standalone,
}

impl AgentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orchestrated => "orchestrated",
            Self::Standalone => "standalone",
        }
    }
}

impl std::str::FromStr for AgentMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "orchestrated" => Ok(Self::Orchestrated),
            "standalone" => Ok(Self::Standalone),
            other => Err(format!("unknown agent mode \"{other}\"")),
        }
    }
}

/// Completion callback fired once per finished translation.
pub type CompletionCallback = Box<dyn Fn(&TranslationResult) + Send + Sync>;

/// A translation agent for a fixed set of languages.
pub struct TranslationAgent {
    agent_id: String,
    supported_languages: FxHashSet<String>,
    mode: AgentMode,
    on_complete: Option<CompletionCallback>,
    running: bool,
}

impl TranslationAgent {
    /// Agent supporting the given ISO 639-1 language codes, initially
    /// stopped.
    pub fn new(agent_id: &str, supported_languages: &[&str]) -> Self {
        Self {
            agent_id: agent_id.to_string(),
            supported_languages: supported_languages
                .iter()
                .map(|lang| lang.to_lowercase())
                .collect(),
            mode: AgentMode::default(),
            on_complete: None,
            running: false,
        }
    }

    /// Set the agent mode.
    pub fn with_mode(mut self, mode: AgentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Register a completion callback, fired once per finished
    /// translation in input order.
    pub fn on_complete(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn mode(&self) -> AgentMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.supported_languages.contains(&lang.to_lowercase())
    }

    /// Start accepting work.
    pub fn start(&mut self) {
        self.running = true;
        #[cfg(feature = "tracing")]
        tracing::info!(
            agent_id = %self.agent_id,
            mode = self.mode.as_str(),
            "agent started"
        );
    }

    /// Stop accepting work. In-flight calls are unaffected.
    pub fn stop(&mut self) {
        self.running = false;
        #[cfg(feature = "tracing")]
        tracing::info!(agent_id = %self.agent_id, "agent stopped");
    }

    /// Both languages must be in the supported set.
    fn check_languages(&self, source_lang: &str, target_lang: &str) -> Result<(), TranslateError> {
        for lang in [source_lang, target_lang] {
            if !self.supports(lang) {
                return Err(TranslateError::UnsupportedLanguage(lang.to_lowercase()));
            }
        }
        Ok(())
    }

    fn check_running(&self) -> Result<(), TranslateError> {
        if !self.running {
            return Err(TranslateError::AgentStopped(self.agent_id.clone()));
        }
        Ok(())
    }

    /// Translate one text between two supported languages.
    pub fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, TranslateError> {
        self.check_running()?;
        self.check_languages(source_lang, target_lang)?;

        let translator = SflTranslator::new(source_lang, target_lang);
        let result = translator.translate(text)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            agent_id = %self.agent_id,
            source = source_lang,
            target = target_lang,
            confidence = result.confidence,
            "translation complete"
        );

        if let Some(callback) = &self.on_complete {
            callback(&result);
        }
        Ok(result)
    }

    /// Translate a batch of texts for one language pair in parallel.
    ///
    /// Translation runs on the rayon pool; the completion callback fires
    /// sequentially afterwards, in input order. The first error aborts
    /// the batch.
    pub fn translate_batch(
        &self,
        texts: &[&str],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<TranslationResult>, TranslateError> {
        self.check_running()?;
        self.check_languages(source_lang, target_lang)?;

        let translator = SflTranslator::new(source_lang, target_lang);
        let results: Vec<TranslationResult> = texts
            .par_iter()
            .map(|text| translator.translate(text))
            .collect::<Result<_, _>>()?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            agent_id = %self.agent_id,
            batch_size = results.len(),
            "batch complete"
        );

        if let Some(callback) = &self.on_complete {
            for result in &results {
                callback(result);
            }
        }
        Ok(results)
    }
}
