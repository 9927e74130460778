//! Theme/rheme analysis.
//!
//! The theme is the clause's point of departure: everything up to (and
//! excluding) the first verb-like element, capped at a configurable span.
//! The rheme is the remainder. A clause with no verb themes its first
//! token.

use serde::{Deserialize, Serialize};

use crate::nlp::lexicon::MarkerLexicon;
use crate::types::Token;

/// Theme/rheme split for a single clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRheme {
    pub theme: String,
    pub rheme: String,
}

/// Configurable theme splitter.
#[derive(Debug, Clone)]
pub struct ThemeAnalyzer {
    /// Maximum number of tokens in the theme span.
    max_theme_tokens: usize,
}

impl Default for ThemeAnalyzer {
    fn default() -> Self {
        Self { max_theme_tokens: 4 }
    }
}

impl ThemeAnalyzer {
    pub fn new(max_theme_tokens: usize) -> Self {
        Self {
            max_theme_tokens: max_theme_tokens.max(1),
        }
    }

    /// Split one clause (sentence slice) into theme and rheme.
    pub fn split(&self, tokens: &[Token], lexicon: &MarkerLexicon) -> ThemeRheme {
        let words: Vec<&Token> = tokens.iter().filter(|t| !t.is_punct).collect();
        if words.is_empty() {
            return ThemeRheme {
                theme: String::new(),
                rheme: String::new(),
            };
        }

        let verb_pos = words.iter().position(|t| {
            lexicon.is_lexical_verb(&t.lemma)
                || lexicon.is_copula(&t.lemma)
                || lexicon.is_auxiliary(&t.lemma)
        });

        let split_at = match verb_pos {
            // Verb-initial clause (imperative): the verb itself is thematic.
            Some(0) => 1,
            Some(pos) => pos.min(self.max_theme_tokens),
            None => 1,
        };

        ThemeRheme {
            theme: join(&words[..split_at]),
            rheme: join(&words[split_at..]),
        }
    }
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

    fn split(text: &str) -> ThemeRheme {
        let stream = Tokenizer::new("en").tokenize(text);
        ThemeAnalyzer::default().split(stream.tokens(), &MarkerLexicon::english())
    }

    #[test]
    fn test_subject_theme() {
        let tr = split("The committee will review the proposal.");
        assert_eq!(tr.theme, "The committee");
        assert_eq!(tr.rheme, "will review the proposal");
    }

    #[test]
    fn test_pronoun_theme() {
        let tr = split("She said the meeting was postponed.");
        assert_eq!(tr.theme, "She");
        assert!(tr.rheme.starts_with("said"));
    }

    #[test]
    fn test_marked_adjunct_theme() {
        // Fronted adjunct stays in the theme up to the cap.
        let tr = split("However the committee will review it.");
        assert_eq!(tr.theme, "However the committee");
    }

    #[test]
    fn test_imperative_theme_is_the_verb() {
        let tr = split("Submit the report.");
        assert_eq!(tr.theme, "Submit");
        assert_eq!(tr.rheme, "the report");
    }

    #[test]
    fn test_verbless_clause_themes_first_token() {
        let tr = split("Quarterly revenue figures.");
        assert_eq!(tr.theme, "Quarterly");
        assert_eq!(tr.rheme, "revenue figures");
    }

    #[test]
    fn test_theme_cap() {
        let tr = ThemeAnalyzer::new(2).split(
            Tokenizer::new("en")
                .tokenize("However the big committee will review it.")
                .tokens(),
            &MarkerLexicon::english(),
        );
        assert_eq!(tr.theme, "However the");
    }

    #[test]
    fn test_empty_clause() {
        let tr = split("");
        assert!(tr.theme.is_empty());
        assert!(tr.rheme.is_empty());
    }
}
