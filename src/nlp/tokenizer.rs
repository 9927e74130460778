//! Unicode-aware tokenization with sentence segmentation.
//!
//! Sentences end at `.`, `?`, or `!` runs (closing quotes and brackets are
//! absorbed into the sentence). Word boundaries come from
//! `unicode-segmentation`, so offsets are byte-accurate for non-ASCII text.
//! Terminal punctuation is kept as punctuation tokens — mood detection
//! reads it downstream.

use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::TokenStream;
use crate::types::Token;

/// Tokenizer for one source language.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Tokenizer {
    /// Build a tokenizer with the stopword list for `language`.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: StopwordFilter::for_language(language),
        }
    }

    /// Build a tokenizer with a caller-supplied stopword filter.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Tokenize `text` into a [`TokenStream`].
    pub fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut token_idx = 0;

        for (sentence_idx, (sent_start, sentence)) in split_sentences(text).into_iter().enumerate()
        {
            for (offset, word) in sentence.split_word_bound_indices() {
                if word.chars().all(char::is_whitespace) {
                    continue;
                }
                let start = sent_start + offset;
                let end = start + word.len();
                let is_punct = !word.chars().any(char::is_alphanumeric);
                let lemma = if is_punct {
                    word.to_string()
                } else {
                    word.to_lowercase()
                };
                let is_stopword = !is_punct && self.stopwords.is_stopword(&lemma);

                tokens.push(Token {
                    text: word.to_string(),
                    lemma,
                    start,
                    end,
                    sentence_idx,
                    token_idx,
                    is_stopword,
                    is_punct,
                });
                token_idx += 1;
            }
        }

        TokenStream::new(text.to_string(), tokens)
    }
}

/// Split `text` into `(byte_offset, sentence)` pairs.
///
/// A sentence ends after a run of terminal punctuation (`.?!`) plus any
/// trailing quotes or closing brackets, followed by whitespace or the end
/// of input.
fn split_sentences(text: &str) -> Vec<(usize, &str)> {
    let mut sentences = Vec::new();
    let mut sent_start = 0;
    let mut terminal_seen = false;

    for (idx, ch) in text.char_indices() {
        match ch {
            '.' | '?' | '!' => terminal_seen = true,
            '"' | '\u{201d}' | '\u{2019}' | ')' | ']' if terminal_seen => {}
            c if c.is_whitespace() && terminal_seen => {
                let sentence = text[sent_start..idx].trim();
                if !sentence.is_empty() {
                    let offset = sent_start + leading_ws(&text[sent_start..idx]);
                    sentences.push((offset, sentence));
                }
                sent_start = idx + c.len_utf8();
                terminal_seen = false;
            }
            _ => terminal_seen = false,
        }
    }

    let tail = text[sent_start..].trim();
    if !tail.is_empty() {
        let offset = sent_start + leading_ws(&text[sent_start..]);
        sentences.push((offset, tail));
    }

    sentences
}

fn leading_ws(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence_tokens() {
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("The committee will review the proposal.");

        let words: Vec<&str> = stream
            .tokens()
            .iter()
            .filter(|t| !t.is_punct)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(
            words,
            vec!["The", "committee", "will", "review", "the", "proposal"]
        );
        assert_eq!(stream.num_sentences(), 1);
    }

    #[test]
    fn test_terminal_punct_is_kept() {
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("Is the meeting postponed?");

        let last = stream.tokens().last().unwrap();
        assert!(last.is_punct);
        assert_eq!(last.text, "?");
    }

    #[test]
    fn test_sentence_split_and_indices() {
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("She said yes. He thought otherwise.");

        assert_eq!(stream.num_sentences(), 2);
        let second: Vec<&Token> = stream
            .tokens()
            .iter()
            .filter(|t| t.sentence_idx == 1)
            .collect();
        assert_eq!(second[0].text, "He");
    }

    #[test]
    fn test_abbreviation_like_period_still_splits() {
        // No abbreviation handling: a period followed by whitespace ends a
        // sentence. Documented limitation of the heuristic splitter.
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("See p. 5 for details.");
        assert_eq!(stream.num_sentences(), 2);
    }

    #[test]
    fn test_byte_offsets_roundtrip() {
        let tokenizer = Tokenizer::new("en");
        let text = "However, the merger was announced!";
        let stream = tokenizer.tokenize(text);

        for token in stream.tokens() {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_stopwords_marked() {
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("The committee will review the proposal.");

        let the = &stream.tokens()[0];
        assert!(the.is_stopword);
        let committee = &stream.tokens()[1];
        assert!(!committee.is_stopword);
    }

    #[test]
    fn test_contraction_stays_one_token_or_splits_cleanly() {
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("Don't worry.");
        // unicode-segmentation keeps "Don't" as a single word.
        assert_eq!(stream.tokens()[0].text, "Don't");
    }

    #[test]
    fn test_non_ascii_offsets() {
        let tokenizer = Tokenizer::new("de");
        let text = "Der Ausschuss prüft den Vorschlag.";
        let stream = tokenizer.tokenize(text);
        for token in stream.tokens() {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("   ");
        assert!(stream.is_empty());
        assert_eq!(stream.num_sentences(), 0);
    }

    #[test]
    fn test_question_then_statement() {
        let tokenizer = Tokenizer::new("en");
        let stream = tokenizer.tokenize("Really? I had no idea.");
        assert_eq!(stream.num_sentences(), 2);
    }
}
