//! Modular translation pipeline.
//!
//! Artifacts flow through eight stages: preprocess, analyze, map,
//! generate, adapt_register, localize, validate, format. Stage
//! implementations are statically dispatched ([`runner::Pipeline`]);
//! JSON specs ([`spec::TranslationSpec`]) select modules dynamically and
//! are checked by the [`validation::ValidationEngine`] before a pipeline
//! is built from them.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

pub use artifacts::{
    AppliedEdit, CheckOutcome, Draft, EditKind, TokenStream, TranslationResult,
};
pub use error_code::ErrorCode;
pub use errors::SpecError;
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{Pipeline, PipelineBuilder, StandardPipeline};
pub use spec::{GeneratorModuleType, PostModuleType, TranslationSpec};
pub use validation::{ValidationEngine, ValidationReport, ValidationRule};
