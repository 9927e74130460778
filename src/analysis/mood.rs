//! Mood and modality analysis.
//!
//! Mood follows terminal punctuation (`?` interrogative, `!` exclamative),
//! with a verb-initial heuristic for imperatives; everything else is
//! declarative. Modality markers are collected with their value on
//! Halliday's low/median/high scale.

use serde::{Deserialize, Serialize};

use crate::nlp::lexicon::MarkerLexicon;
use crate::types::{ModalityDegree, Mood, Token};

/// A modal expression found in the clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityMarker {
    pub marker: String,
    pub degree: ModalityDegree,
}

/// Mood and modality of a single clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub mood: Mood,
    pub modality: Vec<ModalityMarker>,
}

/// Analyze mood and modality for one clause (sentence slice).
pub fn analyze_clause(tokens: &[Token], lexicon: &MarkerLexicon) -> MoodAnalysis {
    MoodAnalysis {
        mood: detect_mood(tokens, lexicon),
        modality: collect_modality(tokens, lexicon),
    }
}

fn detect_mood(tokens: &[Token], lexicon: &MarkerLexicon) -> Mood {
    // Terminal punctuation wins.
    if let Some(terminal) = tokens.iter().rev().find(|t| t.is_punct) {
        if terminal.text.contains('?') {
            return Mood::Interrogative;
        }
        if terminal.text.contains('!') {
            return Mood::Exclamative;
        }
    }

    // Verb-initial clause with no preceding subject: imperative.
    // "Submit the report." / "Think about it."
    if let Some(first) = tokens.iter().find(|t| !t.is_punct) {
        if lexicon.is_lexical_verb(&first.lemma) {
            return Mood::Imperative;
        }
    }

    Mood::Declarative
}

fn collect_modality(tokens: &[Token], lexicon: &MarkerLexicon) -> Vec<ModalityMarker> {
    tokens
        .iter()
        .filter(|t| !t.is_punct)
        .filter_map(|t| {
            lexicon.modality_of(&t.lemma).map(|degree| ModalityMarker {
                marker: t.lemma.clone(),
                degree,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn analyze(text: &str) -> MoodAnalysis {
        let stream = Tokenizer::new("en").tokenize(text);
        analyze_clause(stream.tokens(), &MarkerLexicon::english())
    }

    #[test]
    fn test_declarative_by_default() {
        assert_eq!(analyze("The committee reviewed the proposal.").mood, Mood::Declarative);
    }

    #[test]
    fn test_interrogative_from_question_mark() {
        assert_eq!(analyze("Is the meeting postponed?").mood, Mood::Interrogative);
    }

    #[test]
    fn test_exclamative_from_exclamation_mark() {
        assert_eq!(analyze("The merger was announced!").mood, Mood::Exclamative);
    }

    #[test]
    fn test_imperative_verb_initial() {
        assert_eq!(analyze("Submit the report.").mood, Mood::Imperative);
        assert_eq!(analyze("Think about it.").mood, Mood::Imperative);
    }

    #[test]
    fn test_subject_initial_is_not_imperative() {
        assert_eq!(analyze("She submitted the report.").mood, Mood::Declarative);
    }

    #[test]
    fn test_question_mark_beats_verb_initial() {
        assert_eq!(analyze("Review the proposal?").mood, Mood::Interrogative);
    }

    #[test]
    fn test_missing_punctuation_is_declarative() {
        assert_eq!(analyze("The committee reviewed the proposal").mood, Mood::Declarative);
    }

    #[test]
    fn test_modality_collection() {
        let analysis = analyze("The committee must review the proposal and may reply.");
        let degrees: Vec<ModalityDegree> = analysis.modality.iter().map(|m| m.degree).collect();
        assert_eq!(degrees, vec![ModalityDegree::High, ModalityDegree::Low]);
        assert_eq!(analysis.modality[0].marker, "must");
    }

    #[test]
    fn test_no_modality() {
        assert!(analyze("The sky is blue.").modality.is_empty());
    }
}
