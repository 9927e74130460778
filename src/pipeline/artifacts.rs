//! First-class pipeline artifacts.
//!
//! Each type is a typed intermediate result flowing between pipeline
//! stages: tokens in, SFL analysis, semantic frame, draft, and finally the
//! public [`TranslationResult`]. Everything before the result is internal
//! and may change; the result is the stability boundary serialized for
//! JSON consumers.

use serde::{Deserialize, Serialize};

use crate::analysis::SflAnalysis;
use crate::types::Token;

// ============================================================================
// TokenStream
// ============================================================================

/// Canonical token stream produced by the tokenizer.
///
/// Owns the source text and the tokens; sentence slices are served through
/// precomputed ranges so analyzers can borrow per-clause windows without
/// copying.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    source: String,
    tokens: Vec<Token>,
    /// Token-index range of each sentence.
    sentence_ranges: Vec<(usize, usize)>,
}

impl TokenStream {
    /// Build a stream from the source text and its tokens. Tokens must be
    /// in document order with monotonically non-decreasing sentence
    /// indices (the tokenizer guarantees this).
    pub fn new(source: String, tokens: Vec<Token>) -> Self {
        let mut sentence_ranges: Vec<(usize, usize)> = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            match sentence_ranges.get_mut(token.sentence_idx) {
                Some(range) => range.1 = i + 1,
                None => sentence_ranges.push((i, i + 1)),
            }
        }
        Self {
            source,
            tokens,
            sentence_ranges,
        }
    }

    /// Convenience constructor for tests: derives the source text by
    /// joining token texts.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let source = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(source, tokens.to_vec())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Mutable token access for preprocessors.
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn num_sentences(&self) -> usize {
        self.sentence_ranges.len()
    }

    /// Tokens of sentence `idx`. Empty slice for out-of-range indices.
    pub fn sentence(&self, idx: usize) -> &[Token] {
        match self.sentence_ranges.get(idx) {
            Some(&(start, end)) => &self.tokens[start..end],
            None => &[],
        }
    }

    /// Source text of sentence `idx`, from its first token to its last.
    pub fn sentence_text(&self, idx: usize) -> &str {
        let tokens = self.sentence(idx);
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &self.source[first.start..last.end],
            _ => "",
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Edits a post-processor may apply to a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    RegisterShift,
    IdiomSubstitution,
}

/// A single recorded post-processing edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEdit {
    pub kind: EditKind,
    pub from: String,
    pub to: String,
}

/// Generated translation before formatting: backend output plus the edit
/// log accumulated by post-processors.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub text: String,
    pub confidence: f64,
    pub edits: Vec<AppliedEdit>,
}

impl Draft {
    pub fn new(text: String, confidence: f64) -> Self {
        Self {
            text,
            confidence,
            edits: Vec::new(),
        }
    }

    /// Record an edit and rewrite the draft text.
    pub fn apply_edit(&mut self, kind: EditKind, from: &str, to: &str, new_text: String) {
        self.edits.push(AppliedEdit {
            kind,
            from: from.to_string(),
            to: to.to_string(),
        });
        self.text = new_text;
    }
}

// ============================================================================
// TranslationResult
// ============================================================================

/// Outcome of one output-validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Stable check name (e.g., `"mood_punctuation"`).
    pub check: String,
    pub passed: bool,
    /// Present when the check failed or has something to note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CheckOutcome {
    pub fn pass(check: &str) -> Self {
        Self {
            check: check.to_string(),
            passed: true,
            note: None,
        }
    }

    pub fn fail(check: &str, note: &str) -> Self {
        Self {
            check: check.to_string(),
            passed: false,
            note: Some(note.to_string()),
        }
    }
}

/// Public-facing translation output — the stability boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
    pub source_text: String,
    pub source_lang: String,
    pub target_lang: String,
    /// Attached only when analysis was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfl_analysis: Option<SflAnalysis>,
    pub confidence: f64,
    /// Validation findings; failed checks flag the draft, they never
    /// block it.
    pub checks: Vec<CheckOutcome>,
    /// Post-processing edit log.
    pub edits: Vec<AppliedEdit>,
}

impl TranslationResult {
    /// Whether every validation check passed.
    pub fn all_checks_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}
