//! Natural language processing components
//!
//! Tokenization, stopword filtering, and the marker lexicon that drives
//! the SFL heuristics.

pub mod lexicon;
pub mod stopwords;
pub mod tokenizer;
