//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic: per-stage timing reports plus typed artifact snapshots.
//! [`NoopObserver`] compiles away entirely; [`StageTimingObserver`]
//! collects one report per stage.

use std::time::{Duration, Instant};

use crate::analysis::SflAnalysis;
use crate::pipeline::artifacts::{Draft, TokenStream};
use crate::semantics::SemanticFrame;

// ─── Stage names ────────────────────────────────────────────────────────────

pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_ANALYZE: &str = "analyze";
pub const STAGE_MAP: &str = "map";
pub const STAGE_GENERATE: &str = "generate";
pub const STAGE_REGISTER: &str = "adapt_register";
pub const STAGE_LOCALIZE: &str = "localize";
pub const STAGE_VALIDATE: &str = "validate";
pub const STAGE_FORMAT: &str = "format";

/// All stage names in execution order.
pub const STAGES: [&str; 8] = [
    STAGE_PREPROCESS,
    STAGE_ANALYZE,
    STAGE_MAP,
    STAGE_GENERATE,
    STAGE_REGISTER,
    STAGE_LOCALIZE,
    STAGE_VALIDATE,
    STAGE_FORMAT,
];

// ─── Clock and reports ──────────────────────────────────────────────────────

/// Monotonic stage timer.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Per-stage metrics reported at the stage-end boundary.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    clauses: Option<usize>,
    edits: Option<usize>,
    checks_failed: Option<usize>,
    confidence: Option<f64>,
}

impl StageReport {
    /// A report carrying only the elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    pub fn clauses(&self) -> Option<usize> {
        self.clauses
    }

    pub fn edits(&self) -> Option<usize> {
        self.edits
    }

    pub fn checks_failed(&self) -> Option<usize> {
        self.checks_failed
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }
}

/// Builder for reports with stage-specific metrics.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, sentences: usize) -> Self {
        self.report.sentences = Some(sentences);
        self
    }

    pub fn clauses(mut self, clauses: usize) -> Self {
        self.report.clauses = Some(clauses);
        self
    }

    pub fn edits(mut self, edits: usize) -> Self {
        self.report.edits = Some(edits);
        self
    }

    pub fn checks_failed(mut self, checks_failed: usize) -> Self {
        self.report.checks_failed = Some(checks_failed);
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.report.confidence = Some(confidence);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ─── Observer trait ─────────────────────────────────────────────────────────

/// Receives callbacks at pipeline stage boundaries.
///
/// All methods have empty defaults; implement only what you need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Token stream after preprocessing.
    fn on_tokens(&mut self, _tokens: &TokenStream) {}
    /// SFL analysis after extraction.
    fn on_analysis(&mut self, _analysis: &SflAnalysis) {}
    /// Semantic frame after mapping.
    fn on_frame(&mut self, _frame: &SemanticFrame) {}
    /// Draft after generation and post-processing.
    fn on_draft(&mut self, _draft: &Draft) {}
}

/// Zero-overhead observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects one `(stage, report)` pair per stage boundary.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Total elapsed time across all stages.
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
