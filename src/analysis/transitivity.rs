//! Transitivity analysis — process type, participants, circumstances.
//!
//! Detection is marker-driven: the first verbal marker in a clause wins,
//! then mental, material, behavioral, the structural existential cue
//! ("there" + copula), and finally the relational fallback. Participant
//! roles are named per process type (Sayer/Verbiage, Senser/Phenomenon,
//! Actor/Goal, ...), following the role pairs the transitivity system
//! assigns to each type.

use serde::{Deserialize, Serialize};

use crate::nlp::lexicon::MarkerLexicon;
use crate::types::{ProcessType, Token};

/// A participant in a clause, labeled with its transitivity role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub role: String,
    pub text: String,
}

/// Circumstance kinds recognized by the heuristic extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircumstanceKind {
    Time,
    Place,
    Manner,
}

/// A circumstantial element attached to the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circumstance {
    pub kind: CircumstanceKind,
    pub text: String,
}

/// Transitivity structure of a single clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitivityAnalysis {
    pub process_type: ProcessType,
    /// Surface form of the process verb, when one was matched.
    pub process: Option<String>,
    pub participants: Vec<Participant>,
    pub circumstances: Vec<Circumstance>,
}

/// Analyze the transitivity structure of one clause (sentence slice).
pub fn analyze_clause(tokens: &[Token], lexicon: &MarkerLexicon) -> TransitivityAnalysis {
    let words: Vec<&Token> = tokens.iter().filter(|t| !t.is_punct).collect();
    if words.is_empty() {
        return TransitivityAnalysis {
            process_type: ProcessType::Relational,
            process: None,
            participants: Vec::new(),
            circumstances: Vec::new(),
        };
    }

    if let Some((process_type, idx)) = find_process(&words, lexicon) {
        let process = words[idx].text.clone();
        let (circumstances, circ_spans) = extract_circumstances(&words[idx + 1..], lexicon);
        let participants =
            extract_participants(&words, idx, process_type, &circ_spans, lexicon);
        return TransitivityAnalysis {
            process_type,
            process: Some(process),
            participants,
            circumstances,
        };
    }

    // No marker matched anywhere: relational fallback with no process.
    let (circumstances, _) = extract_circumstances(&words, lexicon);
    TransitivityAnalysis {
        process_type: ProcessType::Relational,
        process: None,
        participants: Vec::new(),
        circumstances,
    }
}

/// Locate the clause's process verb.
///
/// Precedence over the whole clause: verbal, mental, material, behavioral,
/// then the existential cue, then the first copula as relational.
fn find_process(words: &[&Token], lexicon: &MarkerLexicon) -> Option<(ProcessType, usize)> {
    for wanted in [
        ProcessType::Verbal,
        ProcessType::Mental,
        ProcessType::Material,
        ProcessType::Behavioral,
    ] {
        if let Some(idx) = words
            .iter()
            .position(|t| lexicon.process_type_of(&t.lemma) == Some(wanted))
        {
            return Some((wanted, idx));
        }
    }

    // Existential: clause-initial "there" followed by a copula.
    if words.len() >= 2 && words[0].lemma == "there" && lexicon.is_copula(&words[1].lemma) {
        return Some((ProcessType::Existential, 1));
    }

    words
        .iter()
        .position(|t| lexicon.is_copula(&t.lemma))
        .map(|idx| (ProcessType::Relational, idx))
}

/// Extract circumstances from the tokens following the process verb.
///
/// Two cues: preposition-headed spans (`in the boardroom`, `with care`)
/// and bare time expressions (`next week`, `tomorrow`). Returns the
/// circumstances plus the token-index spans they occupy, so participant
/// extraction can exclude them.
fn extract_circumstances(
    after: &[&Token],
    lexicon: &MarkerLexicon,
) -> (Vec<Circumstance>, Vec<(usize, usize)>) {
    let mut circumstances = Vec::new();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < after.len() {
        let lemma = after[i].lemma.as_str();

        let kind = if lexicon.is_time_preposition(lemma) {
            Some(CircumstanceKind::Time)
        } else if lexicon.is_place_preposition(lemma) {
            Some(CircumstanceKind::Place)
        } else if lexicon.is_manner_preposition(lemma) {
            Some(CircumstanceKind::Manner)
        } else {
            None
        };

        if let Some(kind) = kind {
            let end = span_end(after, i + 1, lexicon);
            if end > i + 1 {
                circumstances.push(Circumstance {
                    kind,
                    text: join(&after[i..end]),
                });
                spans.push((i, end));
                i = end;
                continue;
            }
        }

        // Bare time expression: optional "next"/"last"/"this"/"every"
        // before a time word, or a standalone time word.
        if lexicon.is_time_word(lemma) {
            let start = if i > 0
                && matches!(
                    after[i - 1].lemma.as_str(),
                    "next" | "last" | "this" | "every"
                ) {
                i - 1
            } else {
                i
            };
            circumstances.push(Circumstance {
                kind: CircumstanceKind::Time,
                text: join(&after[start..=i]),
            });
            spans.push((start, i + 1));
        }

        i += 1;
    }

    (circumstances, spans)
}

/// End of a preposition-headed span: runs until the next preposition or
/// the end of the clause.
fn span_end(words: &[&Token], from: usize, lexicon: &MarkerLexicon) -> usize {
    let mut end = from;
    while end < words.len() {
        let lemma = words[end].lemma.as_str();
        if lexicon.is_time_preposition(lemma)
            || lexicon.is_place_preposition(lemma)
            || lexicon.is_manner_preposition(lemma)
        {
            break;
        }
        end += 1;
    }
    end
}

/// Build the participant list around the process at `process_idx`.
fn extract_participants(
    words: &[&Token],
    process_idx: usize,
    process_type: ProcessType,
    circ_spans: &[(usize, usize)],
    lexicon: &MarkerLexicon,
) -> Vec<Participant> {
    let (first_role, second_role) = role_names(process_type);
    let mut participants = Vec::new();

    if process_type != ProcessType::Existential {
        let subject = subject_text(&words[..process_idx], lexicon);
        if !subject.is_empty() {
            participants.push(Participant {
                role: first_role.to_string(),
                text: subject,
            });
        }
    }

    let complement = complement_text(&words[process_idx + 1..], circ_spans, lexicon);
    if !complement.is_empty() {
        let role = if process_type == ProcessType::Existential {
            first_role
        } else {
            second_role
        };
        participants.push(Participant {
            role: role.to_string(),
            text: complement,
        });
    }

    participants
}

/// Role pair for a process type: (subject-side, complement-side).
fn role_names(process_type: ProcessType) -> (&'static str, &'static str) {
    match process_type {
        ProcessType::Material => ("Actor", "Goal"),
        ProcessType::Mental => ("Senser", "Phenomenon"),
        ProcessType::Verbal => ("Sayer", "Verbiage"),
        ProcessType::Relational => ("Carrier", "Attribute"),
        ProcessType::Behavioral => ("Behaver", "Range"),
        ProcessType::Existential => ("Existent", ""),
    }
}

/// The subject-side participant: pre-verbal tokens minus auxiliaries and
/// leading determiners. Pronouns are kept even though they are stopwords.
fn subject_text(before: &[&Token], lexicon: &MarkerLexicon) -> String {
    let kept: Vec<&&Token> = before
        .iter()
        .filter(|t| !lexicon.is_auxiliary(&t.lemma))
        .skip_while(|t| lexicon.is_determiner(&t.lemma))
        .collect();
    kept.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The complement-side participant: post-verbal tokens minus any that fall
/// inside a circumstance span.
fn complement_text(
    after: &[&Token],
    circ_spans: &[(usize, usize)],
    lexicon: &MarkerLexicon,
) -> String {
    let kept: Vec<&str> = after
        .iter()
        .enumerate()
        .filter(|(i, _)| !circ_spans.iter().any(|&(s, e)| (s..e).contains(i)))
        .map(|(_, t)| t.text.as_str())
        .collect();

    // A bare trailing determiner is noise, not a participant.
    if kept.len() == 1 && lexicon.is_determiner(&kept[0].to_lowercase()) {
        return String::new();
    }
    kept.join(" ")
}

fn join(words: &[&Token]) -> String {
    words
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;
    use crate::pipeline::artifacts::TokenStream;

    fn clause(text: &str) -> TokenStream {
        Tokenizer::new("en").tokenize(text)
    }

    fn analyze(text: &str) -> TransitivityAnalysis {
        let stream = clause(text);
        analyze_clause(stream.tokens(), &MarkerLexicon::english())
    }

    #[test]
    fn test_verbal_process_with_sayer_and_verbiage() {
        let analysis = analyze("She said the meeting was postponed.");
        assert_eq!(analysis.process_type, ProcessType::Verbal);
        assert_eq!(analysis.process.as_deref(), Some("said"));

        let sayer = &analysis.participants[0];
        assert_eq!(sayer.role, "Sayer");
        assert_eq!(sayer.text, "She");

        let verbiage = &analysis.participants[1];
        assert_eq!(verbiage.role, "Verbiage");
        assert_eq!(verbiage.text, "the meeting was postponed");
    }

    #[test]
    fn test_mental_process() {
        let analysis = analyze("I believe the plan.");
        assert_eq!(analysis.process_type, ProcessType::Mental);
        assert_eq!(analysis.participants[0].role, "Senser");
        assert_eq!(analysis.participants[0].text, "I");
        assert_eq!(analysis.participants[1].role, "Phenomenon");
    }

    #[test]
    fn test_material_process_with_time_circumstance() {
        let analysis = analyze("The committee will review the proposal next week.");
        assert_eq!(analysis.process_type, ProcessType::Material);
        assert_eq!(analysis.process.as_deref(), Some("review"));

        assert_eq!(analysis.participants[0].role, "Actor");
        assert_eq!(analysis.participants[0].text, "committee");
        assert_eq!(analysis.participants[1].role, "Goal");
        assert_eq!(analysis.participants[1].text, "the proposal");

        assert_eq!(analysis.circumstances.len(), 1);
        assert_eq!(analysis.circumstances[0].kind, CircumstanceKind::Time);
        assert_eq!(analysis.circumstances[0].text, "next week");
    }

    #[test]
    fn test_verbal_beats_mental_precedence() {
        // Both "said" and "thought" present: verbal wins, as in the
        // fixed detection precedence.
        let analysis = analyze("He said he thought otherwise.");
        assert_eq!(analysis.process_type, ProcessType::Verbal);
    }

    #[test]
    fn test_behavioral_process() {
        let analysis = analyze("The audience laughed.");
        assert_eq!(analysis.process_type, ProcessType::Behavioral);
        assert_eq!(analysis.participants[0].role, "Behaver");
        assert_eq!(analysis.participants[0].text, "audience");
    }

    #[test]
    fn test_existential_clause() {
        let analysis = analyze("There is a problem.");
        assert_eq!(analysis.process_type, ProcessType::Existential);
        assert_eq!(analysis.participants.len(), 1);
        assert_eq!(analysis.participants[0].role, "Existent");
        assert_eq!(analysis.participants[0].text, "a problem");
    }

    #[test]
    fn test_relational_fallback() {
        let analysis = analyze("The sky is blue.");
        assert_eq!(analysis.process_type, ProcessType::Relational);
        assert_eq!(analysis.participants[0].role, "Carrier");
        assert_eq!(analysis.participants[0].text, "sky");
        assert_eq!(analysis.participants[1].role, "Attribute");
        assert_eq!(analysis.participants[1].text, "blue");
    }

    #[test]
    fn test_no_marker_at_all() {
        let analysis = analyze("Quarterly revenue figures.");
        assert_eq!(analysis.process_type, ProcessType::Relational);
        assert!(analysis.process.is_none());
        assert!(analysis.participants.is_empty());
    }

    #[test]
    fn test_place_circumstance() {
        let analysis = analyze("They signed the contract in the boardroom.");
        assert_eq!(analysis.process_type, ProcessType::Material);
        let place = analysis
            .circumstances
            .iter()
            .find(|c| c.kind == CircumstanceKind::Place)
            .unwrap();
        assert_eq!(place.text, "in the boardroom");

        // The circumstance span is excluded from the Goal.
        assert_eq!(analysis.participants[1].role, "Goal");
        assert_eq!(analysis.participants[1].text, "the contract");
    }

    #[test]
    fn test_manner_circumstance() {
        let analysis = analyze("He opened the box with care.");
        let manner = analysis
            .circumstances
            .iter()
            .find(|c| c.kind == CircumstanceKind::Manner)
            .unwrap();
        assert_eq!(manner.text, "with care");
    }

    #[test]
    fn test_empty_clause() {
        let analysis = analyze_clause(&[], &MarkerLexicon::english());
        assert_eq!(analysis.process_type, ProcessType::Relational);
        assert!(analysis.participants.is_empty());
    }
}
