//! SFL-guided translation pipeline.
//!
//! This crate analyzes source text through the lens of Systemic
//! Functional Linguistics — transitivity (process types and participant
//! roles), mood and modality, theme/rheme, and register — and threads
//! that analysis through a modular translation pipeline: the analysis
//! informs register adaptation, cultural localization, and output
//! validation around a pluggable generation backend.
//!
//! Generation itself is deliberately simple: the built-in backends are a
//! tagging placeholder and a deterministic glossary. The value is in the
//! functional analysis and the pipeline around it; a production
//! deployment would implement
//! [`TranslationBackend`](translate::TranslationBackend) against a real
//! MT service.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sfl_translate::translator::SflTranslator;
//! use sfl_translate::types::Register;
//!
//! let translator = SflTranslator::new("en", "es")
//!     .with_register(Register::Formal)
//!     .with_localization("MX")
//!     .with_analysis();
//!
//! let result = translator.translate("We don't accept the proposal.")?;
//! println!("{}", result.translation);
//! for clause in &result.sfl_analysis.unwrap().clauses {
//!     println!("{:?}", clause.transitivity.process_type);
//! }
//! # Ok::<(), sfl_translate::errors::TranslateError>(())
//! ```
//!
//! # Architecture
//!
//! | Module | Role |
//! |--------|------|
//! | [`nlp`] | Tokenization, stopwords, marker lexicon |
//! | [`analysis`] | SFL analysis: transitivity, mood, theme, register, cohesion |
//! | [`semantics`] | Language-neutral semantic frame and target conventions |
//! | [`translate`] | Backends and post-processors |
//! | [`pipeline`] | Stage traits, runner, observer, JSON spec + validation |
//! | [`translator`] | High-level facade |
//! | [`agent`] | Lifecycle wrapper with batch parallelism |

pub mod agent;
pub mod analysis;
pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod semantics;
pub mod translate;
pub mod translator;
pub mod types;

pub use agent::{AgentMode, TranslationAgent};
pub use analysis::SflAnalysis;
pub use errors::TranslateError;
pub use pipeline::{TranslationResult, TranslationSpec};
pub use translator::{SflTranslator, TranslateOptions};
pub use types::{Mood, ProcessType, Register, TranslatorConfig};
