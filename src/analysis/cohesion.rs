//! Cohesion analysis — conjunctive adjunct scan.
//!
//! Collects the cohesive devices (however, therefore, moreover, ...) in
//! document order, deduplicated on first occurrence.

use crate::nlp::lexicon::MarkerLexicon;
use crate::types::Token;

/// Find cohesion markers in document order, first occurrence only.
pub fn find_markers(tokens: &[Token], lexicon: &MarkerLexicon) -> Vec<String> {
    let mut found = Vec::new();
    for token in tokens.iter().filter(|t| !t.is_punct) {
        if lexicon.is_cohesion_marker(&token.lemma) && !found.contains(&token.lemma) {
            found.push(token.lemma.clone());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn markers(text: &str) -> Vec<String> {
        let stream = Tokenizer::new("en").tokenize(text);
        find_markers(stream.tokens(), &MarkerLexicon::english())
    }

    #[test]
    fn test_markers_in_document_order() {
        let found = markers("However, the plan failed. Therefore, we revised it.");
        assert_eq!(found, vec!["however", "therefore"]);
    }

    #[test]
    fn test_duplicates_collapsed() {
        let found = markers("Thus it began. Thus it ended.");
        assert_eq!(found, vec!["thus"]);
    }

    #[test]
    fn test_no_markers() {
        assert!(markers("The committee reviewed the proposal.").is_empty());
    }

    #[test]
    fn test_case_insensitive_via_lemma() {
        let found = markers("MOREOVER, the figures improved.");
        assert_eq!(found, vec!["moreover"]);
    }
}
