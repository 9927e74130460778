//! Register detection — the field / tenor / mode variables.
//!
//! Field is decided by term-list hit counts (business, technical,
//! academic, else general). Tenor comes from formality and casual markers,
//! with lexical density as the tie-breaker. Mode is fixed to "written":
//! this crate only sees written input.

use serde::{Deserialize, Serialize};

use crate::nlp::lexicon::MarkerLexicon;
use crate::types::Token;

/// The three register variables for a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterProfile {
    /// Semantic domain: `business`, `technical`, `academic`, or `general`.
    pub field: String,
    /// Formality: `formal`, `casual`, or `neutral`.
    pub tenor: String,
    /// Channel: always `written`.
    pub mode: String,
}

/// Lexical density above which an unmarked text is read as formal.
const FORMAL_DENSITY_THRESHOLD: f64 = 0.6;

/// Detect the register profile over a whole token stream.
pub fn detect(tokens: &[Token], lexicon: &MarkerLexicon) -> RegisterProfile {
    RegisterProfile {
        field: detect_field(tokens, lexicon),
        tenor: detect_tenor(tokens, lexicon),
        mode: "written".to_string(),
    }
}

fn detect_field(tokens: &[Token], lexicon: &MarkerLexicon) -> String {
    let mut business = 0usize;
    let mut technical = 0usize;
    let mut academic = 0usize;

    for token in tokens.iter().filter(|t| !t.is_punct) {
        if lexicon.is_business_term(&token.lemma) {
            business += 1;
        }
        if lexicon.is_technical_term(&token.lemma) {
            technical += 1;
        }
        if lexicon.is_academic_term(&token.lemma) {
            academic += 1;
        }
    }

    // Ties resolve business > technical > academic.
    let best = business.max(technical).max(academic);
    if best == 0 {
        "general".to_string()
    } else if business == best {
        "business".to_string()
    } else if technical == best {
        "technical".to_string()
    } else {
        "academic".to_string()
    }
}

fn detect_tenor(tokens: &[Token], lexicon: &MarkerLexicon) -> String {
    let words: Vec<&Token> = tokens.iter().filter(|t| !t.is_punct).collect();
    if words.is_empty() {
        return "neutral".to_string();
    }

    let formal_hits = words
        .iter()
        .filter(|t| lexicon.is_formal_marker(&t.lemma))
        .count();
    let casual_hits = words
        .iter()
        .filter(|t| lexicon.is_casual_marker(&t.lemma) || is_contraction(&t.text))
        .count();

    if formal_hits > 0 && formal_hits >= casual_hits {
        return "formal".to_string();
    }
    if casual_hits > 0 {
        return "casual".to_string();
    }
    if lexical_density(&words) >= FORMAL_DENSITY_THRESHOLD {
        return "formal".to_string();
    }
    "neutral".to_string()
}

/// Ratio of content words (non-stopword) to all words.
fn lexical_density(words: &[&Token]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let content = words.iter().filter(|t| !t.is_stopword).count();
    content as f64 / words.len() as f64
}

fn is_contraction(text: &str) -> bool {
    text.contains('\'') || text.contains('\u{2019}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn detect_text(text: &str) -> RegisterProfile {
        let stream = Tokenizer::new("en").tokenize(text);
        detect(stream.tokens(), &MarkerLexicon::english())
    }

    #[test]
    fn test_business_field() {
        let profile = detect_text("The committee approved the merger proposal.");
        assert_eq!(profile.field, "business");
    }

    #[test]
    fn test_technical_field() {
        let profile = detect_text("The server logged high latency on the database.");
        assert_eq!(profile.field, "technical");
    }

    #[test]
    fn test_academic_field() {
        let profile = detect_text("The methodology follows the empirical literature.");
        assert_eq!(profile.field, "academic");
    }

    #[test]
    fn test_general_field() {
        let profile = detect_text("The quick brown fox jumps over the lazy dog.");
        assert_eq!(profile.field, "general");
    }

    #[test]
    fn test_formal_tenor_from_markers() {
        let profile = detect_text("The parties shall honor the aforementioned terms.");
        assert_eq!(profile.tenor, "formal");
    }

    #[test]
    fn test_casual_tenor_from_markers() {
        let profile = detect_text("Yeah we're gonna sort that stuff out.");
        assert_eq!(profile.tenor, "casual");
    }

    #[test]
    fn test_contraction_reads_casual() {
        let profile = detect_text("It's on the way and we don't mind at all.");
        assert_eq!(profile.tenor, "casual");
    }

    #[test]
    fn test_mode_is_written() {
        let profile = detect_text("Anything at all.");
        assert_eq!(profile.mode, "written");
    }

    #[test]
    fn test_dense_unmarked_text_is_formal() {
        // Nearly every word is a content word.
        let profile = detect_text("Quarterly revenue projections exceeded analyst expectations.");
        assert_eq!(profile.tenor, "formal");
    }

    #[test]
    fn test_empty_input_neutral_general() {
        let profile = detect(&[], &MarkerLexicon::english());
        assert_eq!(profile.field, "general");
        assert_eq!(profile.tenor, "neutral");
    }
}
