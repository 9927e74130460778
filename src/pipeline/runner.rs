//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying an optional [`PipelineObserver`] at each
//! boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so the compiler monomorphizes
//! each variant combination into a unique concrete type. Zero-sized default
//! stages (e.g., [`NoopPreprocessor`], [`DefaultSemanticMapper`],
//! [`StandardValidator`]) add zero bytes and zero runtime cost. The one
//! dynamic seam is the generation backend: [`StandardPipeline`] wraps a
//! boxed [`DynBackend`](crate::translate::backend::DynBackend) so backends
//! can be swapped without changing the pipeline type.
//!
//! # Factory methods
//!
//! Use [`StandardPipeline::standard()`] to build the full translation
//! pipeline without spelling out the generics manually.

use crate::errors::TranslateError;
use crate::pipeline::artifacts::{TokenStream, TranslationResult};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_ANALYZE, STAGE_FORMAT,
    STAGE_GENERATE, STAGE_LOCALIZE, STAGE_MAP, STAGE_PREPROCESS, STAGE_REGISTER, STAGE_VALIDATE,
};
use crate::pipeline::traits::{
    BackendGenerator, DefaultSemanticMapper, FeatureExtractor, Generator, NoopPreprocessor,
    OutputValidator, PostProcessor, Preprocessor, ResultFormatter, SemanticMapper,
    SflFeatureExtractor, StandardFormatter, StandardValidator,
};
use crate::translate::backend::DynBackend;
use crate::translate::localize::CulturalLocalizer;
use crate::translate::register_shift::RegisterAdapter;
use crate::types::TranslatorConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// All type parameters have trait bounds enforced at the `impl` level, so the
/// struct itself is unconditionally constructible (useful for builders).
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Pre` | [`Preprocessor`] | [`NoopPreprocessor`] |
/// | `Ext` | [`FeatureExtractor`] | [`SflFeatureExtractor`] |
/// | `Map` | [`SemanticMapper`] | [`DefaultSemanticMapper`] |
/// | `Gen` | [`Generator`] | [`BackendGenerator<DynBackend>`] |
/// | `Reg` | [`PostProcessor`] | [`RegisterAdapter`] |
/// | `Loc` | [`PostProcessor`] | [`CulturalLocalizer`] |
/// | `Val` | [`OutputValidator`] | [`StandardValidator`] |
/// | `Fmt` | [`ResultFormatter`] | [`StandardFormatter`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Pre, Ext, Map, Gen, Reg, Loc, Val, Fmt> {
    pub preprocessor: Pre,
    pub extractor: Ext,
    pub mapper: Map,
    pub generator: Gen,
    pub register_adapter: Reg,
    pub localizer: Loc,
    pub validator: Val,
    pub formatter: Fmt,
}

/// Type alias for the standard translation pipeline.
pub type StandardPipeline = Pipeline<
    NoopPreprocessor,
    SflFeatureExtractor,
    DefaultSemanticMapper,
    BackendGenerator<DynBackend>,
    RegisterAdapter,
    CulturalLocalizer,
    StandardValidator,
    StandardFormatter,
>;

impl StandardPipeline {
    /// Build the standard translation pipeline around the given backend.
    ///
    /// All other stages use their defaults:
    /// - No preprocessing
    /// - Full clause-by-clause SFL extraction
    /// - Default semantic mapping with target-language conventions
    /// - Register adaptation (inert without a configured register)
    /// - Cultural localization (inert without a configured region)
    /// - Standard draft checks
    /// - Standard result formatter
    pub fn standard(backend: DynBackend) -> Self {
        Pipeline {
            preprocessor: NoopPreprocessor,
            extractor: SflFeatureExtractor::new(),
            mapper: DefaultSemanticMapper,
            generator: BackendGenerator::new(backend),
            register_adapter: RegisterAdapter,
            localizer: CulturalLocalizer::builtin(),
            validator: StandardValidator,
            formatter: StandardFormatter,
        }
    }
}

// ============================================================================
// Pipeline::run — execute stages in order
// ============================================================================

impl<Pre, Ext, Map, Gen, Reg, Loc, Val, Fmt> Pipeline<Pre, Ext, Map, Gen, Reg, Loc, Val, Fmt>
where
    Pre: Preprocessor,
    Ext: FeatureExtractor,
    Map: SemanticMapper,
    Gen: Generator,
    Reg: PostProcessor,
    Loc: PostProcessor,
    Val: OutputValidator,
    Fmt: ResultFormatter,
{
    /// Execute the pipeline, producing a [`TranslationResult`].
    ///
    /// Stages run in order:
    /// 1. Preprocess (mutate tokens in place)
    /// 2. Analyze (SFL feature extraction)
    /// 3. Map to the semantic frame
    /// 4. Generate the draft
    /// 5. Adapt register
    /// 6. Localize
    /// 7. Validate the draft
    /// 8. Format the result
    ///
    /// Input limits from the config are enforced before any stage runs.
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`](crate::pipeline::observer::NoopObserver) for
    /// zero-overhead execution.
    pub fn run(
        &self,
        mut tokens: TokenStream,
        cfg: &TranslatorConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<TranslationResult, TranslateError> {
        enforce_limits(&tokens, cfg)?;

        // Stage 0: Preprocess
        trace_stage!(STAGE_PREPROCESS);
        observer.on_stage_start(STAGE_PREPROCESS);
        let clock = StageClock::start();
        self.preprocessor.preprocess(&mut tokens, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(tokens.num_sentences())
            .build();
        observer.on_stage_end(STAGE_PREPROCESS, &report);
        observer.on_tokens(&tokens);

        // Stage 1: Analyze
        trace_stage!(STAGE_ANALYZE);
        observer.on_stage_start(STAGE_ANALYZE);
        let clock = StageClock::start();
        let analysis = self.extractor.extract(&tokens, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .clauses(analysis.clauses.len())
            .build();
        observer.on_stage_end(STAGE_ANALYZE, &report);
        observer.on_analysis(&analysis);

        // Stage 2: Map to semantic frame
        trace_stage!(STAGE_MAP);
        observer.on_stage_start(STAGE_MAP);
        let clock = StageClock::start();
        let frame = self.mapper.map(&tokens, &analysis, cfg);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_MAP, &report);
        observer.on_frame(&frame);

        // Stage 3: Generate
        trace_stage!(STAGE_GENERATE);
        observer.on_stage_start(STAGE_GENERATE);
        let clock = StageClock::start();
        let mut draft = self.generator.generate(&tokens, &frame, cfg)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .confidence(draft.confidence)
            .build();
        observer.on_stage_end(STAGE_GENERATE, &report);

        // Stage 4: Adapt register
        trace_stage!(STAGE_REGISTER);
        observer.on_stage_start(STAGE_REGISTER);
        let clock = StageClock::start();
        let edits_before = draft.edits.len();
        self.register_adapter.post_process(&mut draft, &frame, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .edits(draft.edits.len() - edits_before)
            .build();
        observer.on_stage_end(STAGE_REGISTER, &report);

        // Stage 5: Localize
        trace_stage!(STAGE_LOCALIZE);
        observer.on_stage_start(STAGE_LOCALIZE);
        let clock = StageClock::start();
        let edits_before = draft.edits.len();
        self.localizer.post_process(&mut draft, &frame, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .edits(draft.edits.len() - edits_before)
            .build();
        observer.on_stage_end(STAGE_LOCALIZE, &report);
        observer.on_draft(&draft);

        // Stage 6: Validate
        trace_stage!(STAGE_VALIDATE);
        observer.on_stage_start(STAGE_VALIDATE);
        let clock = StageClock::start();
        let checks = self.validator.validate(&draft, &frame, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .checks_failed(checks.iter().filter(|c| !c.passed).count())
            .build();
        observer.on_stage_end(STAGE_VALIDATE, &report);

        // Stage 7: Format
        trace_stage!(STAGE_FORMAT);
        observer.on_stage_start(STAGE_FORMAT);
        let clock = StageClock::start();
        let result = self
            .formatter
            .format(draft, analysis, checks, tokens.source(), cfg);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_FORMAT, &report);

        Ok(result)
    }
}

/// Fail fast when the input exceeds configured limits.
fn enforce_limits(tokens: &TokenStream, cfg: &TranslatorConfig) -> Result<(), TranslateError> {
    if let Some(max) = cfg.max_tokens {
        if tokens.len() > max {
            return Err(TranslateError::LimitExceeded {
                limit_name: "max_tokens",
                limit: max,
                actual: tokens.len(),
            });
        }
    }
    if let Some(max) = cfg.max_sentences {
        if tokens.num_sentences() > max {
            return Err(TranslateError::LimitExceeded {
                limit_name: "max_sentences",
                limit: max,
                actual: tokens.num_sentences(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the standard pipeline around a placeholder backend and
/// allows overriding individual stages.
///
/// ```rust,ignore
/// use sfl_translate::pipeline::runner::PipelineBuilder;
/// use sfl_translate::translate::GlossaryBackend;
///
/// let pipeline = PipelineBuilder::new()
///     .generator(BackendGenerator::new(GlossaryBackend::from_pairs([
///         ("hello", "hola"),
///     ])))
///     .build();
/// ```
pub struct PipelineBuilder<
    Pre = NoopPreprocessor,
    Ext = SflFeatureExtractor,
    Map = DefaultSemanticMapper,
    Gen = BackendGenerator<DynBackend>,
    Reg = RegisterAdapter,
    Loc = CulturalLocalizer,
    Val = StandardValidator,
    Fmt = StandardFormatter,
> {
    preprocessor: Pre,
    extractor: Ext,
    mapper: Map,
    generator: Gen,
    register_adapter: Reg,
    localizer: Loc,
    validator: Val,
    formatter: Fmt,
}

impl PipelineBuilder {
    /// Start building from the standard stages around a placeholder
    /// backend.
    pub fn new() -> Self {
        let backend: DynBackend = Box::new(crate::translate::backend::PlaceholderBackend);
        PipelineBuilder {
            preprocessor: NoopPreprocessor,
            extractor: SflFeatureExtractor::new(),
            mapper: DefaultSemanticMapper,
            generator: BackendGenerator::new(backend),
            register_adapter: RegisterAdapter,
            localizer: CulturalLocalizer::builtin(),
            validator: StandardValidator,
            formatter: StandardFormatter,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Pre, Ext, Map, Gen, Reg, Loc, Val, Fmt> PipelineBuilder<Pre, Ext, Map, Gen, Reg, Loc, Val, Fmt> {
    /// Override the preprocessor stage.
    pub fn preprocessor<P: Preprocessor>(
        self,
        p: P,
    ) -> PipelineBuilder<P, Ext, Map, Gen, Reg, Loc, Val, Fmt> {
        PipelineBuilder {
            preprocessor: p,
            extractor: self.extractor,
            mapper: self.mapper,
            generator: self.generator,
            register_adapter: self.register_adapter,
            localizer: self.localizer,
            validator: self.validator,
            formatter: self.formatter,
        }
    }

    /// Override the feature extractor stage.
    pub fn extractor<E: FeatureExtractor>(
        self,
        e: E,
    ) -> PipelineBuilder<Pre, E, Map, Gen, Reg, Loc, Val, Fmt> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            extractor: e,
            mapper: self.mapper,
            generator: self.generator,
            register_adapter: self.register_adapter,
            localizer: self.localizer,
            validator: self.validator,
            formatter: self.formatter,
        }
    }

    /// Override the semantic mapper stage.
    pub fn mapper<M: SemanticMapper>(
        self,
        m: M,
    ) -> PipelineBuilder<Pre, Ext, M, Gen, Reg, Loc, Val, Fmt> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            extractor: self.extractor,
            mapper: m,
            generator: self.generator,
            register_adapter: self.register_adapter,
            localizer: self.localizer,
            validator: self.validator,
            formatter: self.formatter,
        }
    }

    /// Override the generator stage.
    pub fn generator<G: Generator>(
        self,
        g: G,
    ) -> PipelineBuilder<Pre, Ext, Map, G, Reg, Loc, Val, Fmt> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            extractor: self.extractor,
            mapper: self.mapper,
            generator: g,
            register_adapter: self.register_adapter,
            localizer: self.localizer,
            validator: self.validator,
            formatter: self.formatter,
        }
    }

    /// Override the register adaptation stage.
    pub fn register_adapter<R: PostProcessor>(
        self,
        r: R,
    ) -> PipelineBuilder<Pre, Ext, Map, Gen, R, Loc, Val, Fmt> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            extractor: self.extractor,
            mapper: self.mapper,
            generator: self.generator,
            register_adapter: r,
            localizer: self.localizer,
            validator: self.validator,
            formatter: self.formatter,
        }
    }

    /// Override the localization stage.
    pub fn localizer<L: PostProcessor>(
        self,
        l: L,
    ) -> PipelineBuilder<Pre, Ext, Map, Gen, Reg, L, Val, Fmt> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            extractor: self.extractor,
            mapper: self.mapper,
            generator: self.generator,
            register_adapter: self.register_adapter,
            localizer: l,
            validator: self.validator,
            formatter: self.formatter,
        }
    }

    /// Override the output validator stage.
    pub fn validator<V: OutputValidator>(
        self,
        v: V,
    ) -> PipelineBuilder<Pre, Ext, Map, Gen, Reg, Loc, V, Fmt> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            extractor: self.extractor,
            mapper: self.mapper,
            generator: self.generator,
            register_adapter: self.register_adapter,
            localizer: self.localizer,
            validator: v,
            formatter: self.formatter,
        }
    }

    /// Override the result formatter stage.
    pub fn formatter<F: ResultFormatter>(
        self,
        f: F,
    ) -> PipelineBuilder<Pre, Ext, Map, Gen, Reg, Loc, Val, F> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            extractor: self.extractor,
            mapper: self.mapper,
            generator: self.generator,
            register_adapter: self.register_adapter,
            localizer: self.localizer,
            validator: self.validator,
            formatter: f,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Pre, Ext, Map, Gen, Reg, Loc, Val, Fmt> {
        Pipeline {
            preprocessor: self.preprocessor,
            extractor: self.extractor,
            mapper: self.mapper,
            generator: self.generator,
            register_adapter: self.register_adapter,
            localizer: self.localizer,
            validator: self.validator,
            formatter: self.formatter,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
