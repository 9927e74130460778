//! SFL feature extraction.
//!
//! Analysis is clause-by-clause (one clause per sentence in this
//! implementation), rolled up into a document-level [`SflAnalysis`]. All
//! analyzers are pure functions over token slices plus the marker lexicon;
//! nothing here mutates the token stream.

pub mod cohesion;
pub mod mood;
pub mod register;
pub mod theme;
pub mod transitivity;

use serde::{Deserialize, Serialize};

use crate::nlp::lexicon::MarkerLexicon;
use crate::pipeline::artifacts::TokenStream;
use crate::types::{Mood, ProcessType};

pub use mood::{ModalityMarker, MoodAnalysis};
pub use register::RegisterProfile;
pub use theme::{ThemeAnalyzer, ThemeRheme};
pub use transitivity::{Circumstance, CircumstanceKind, Participant, TransitivityAnalysis};

/// Full SFL analysis of one clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    pub sentence_idx: usize,
    /// Source text of the clause.
    pub text: String,
    pub transitivity: TransitivityAnalysis,
    pub mood: MoodAnalysis,
    pub theme_rheme: ThemeRheme,
}

/// Document-level SFL analysis: per-clause detail plus the rollup values
/// the translation stages consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SflAnalysis {
    pub clauses: Vec<ClauseAnalysis>,
    /// Dominant process type across clauses (ties break on detection
    /// precedence: verbal first, relational last).
    pub process_type: ProcessType,
    /// Document mood: the mood of the final clause, matching
    /// terminal-punctuation semantics over the whole text.
    pub mood: Mood,
    /// Document theme: first word of the first clause.
    pub theme: String,
    pub register: RegisterProfile,
    /// Cohesion markers in document order, deduplicated.
    pub cohesion_markers: Vec<String>,
}

impl SflAnalysis {
    /// Analysis of an empty input.
    pub fn empty() -> Self {
        Self {
            clauses: Vec::new(),
            process_type: ProcessType::Relational,
            mood: Mood::Declarative,
            theme: String::new(),
            register: RegisterProfile {
                field: "general".to_string(),
                tenor: "neutral".to_string(),
                mode: "written".to_string(),
            },
            cohesion_markers: Vec::new(),
        }
    }

    /// The clause whose process type matches the document rollup, if any.
    pub fn dominant_clause(&self) -> Option<&ClauseAnalysis> {
        self.clauses
            .iter()
            .find(|c| c.transitivity.process_type == self.process_type)
            .or_else(|| self.clauses.first())
    }
}

/// Run the full per-clause analysis and roll it up.
pub fn analyze_stream(stream: &TokenStream, lexicon: &MarkerLexicon) -> SflAnalysis {
    if stream.is_empty() {
        return SflAnalysis::empty();
    }

    let theme_analyzer = ThemeAnalyzer::default();
    let mut clauses = Vec::with_capacity(stream.num_sentences());

    for sentence_idx in 0..stream.num_sentences() {
        let tokens = stream.sentence(sentence_idx);
        clauses.push(ClauseAnalysis {
            sentence_idx,
            text: stream.sentence_text(sentence_idx).to_string(),
            transitivity: transitivity::analyze_clause(tokens, lexicon),
            mood: mood::analyze_clause(tokens, lexicon),
            theme_rheme: theme_analyzer.split(tokens, lexicon),
        });
    }

    let process_type = dominant_process(&clauses);
    let mood = clauses
        .last()
        .map(|c| c.mood.mood)
        .unwrap_or(Mood::Declarative);
    let theme = clauses
        .first()
        .and_then(|c| c.theme_rheme.theme.split_whitespace().next())
        .unwrap_or_default()
        .to_string();

    SflAnalysis {
        process_type,
        mood,
        theme,
        register: register::detect(stream.tokens(), lexicon),
        cohesion_markers: cohesion::find_markers(stream.tokens(), lexicon),
        clauses,
    }
}

/// Most frequent process type; ties break on fixed detection precedence.
fn dominant_process(clauses: &[ClauseAnalysis]) -> ProcessType {
    let mut counts: Vec<(ProcessType, usize)> = Vec::new();
    for clause in clauses {
        let pt = clause.transitivity.process_type;
        match counts.iter_mut().find(|(p, _)| *p == pt) {
            Some((_, n)) => *n += 1,
            None => counts.push((pt, 1)),
        }
    }
    counts
        .into_iter()
        .max_by(|a, b| {
            a.1.cmp(&b.1)
                .then(b.0.precedence().cmp(&a.0.precedence()))
        })
        .map(|(p, _)| p)
        .unwrap_or(ProcessType::Relational)
}
