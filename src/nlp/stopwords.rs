//! Multi-language stopword filtering.
//!
//! Backed by the `stop-words` crate, with built-in fallback lists for CJK
//! languages the crate does not cover. The tokenizer uses a filter to mark
//! tokens at construction time; the register detector uses the marks to
//! compute lexical density.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A stopword lookup table for one language, with custom-list support.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl StopwordFilter {
    /// Build a filter for an ISO 639-1 language code. Unknown codes get an
    /// empty filter rather than a wrong-language one.
    pub fn for_language(language: &str) -> Self {
        let stopwords = match language.to_lowercase().as_str() {
            "en" => from_crate(LANGUAGE::English),
            "de" => from_crate(LANGUAGE::German),
            "fr" => from_crate(LANGUAGE::French),
            "es" => from_crate(LANGUAGE::Spanish),
            "it" => from_crate(LANGUAGE::Italian),
            "pt" => from_crate(LANGUAGE::Portuguese),
            "nl" => from_crate(LANGUAGE::Dutch),
            "ru" => from_crate(LANGUAGE::Russian),
            "sv" => from_crate(LANGUAGE::Swedish),
            "ar" => from_crate(LANGUAGE::Arabic),
            "zh" => builtin(CHINESE),
            "ja" => builtin(JAPANESE),
            _ => FxHashSet::default(),
        };
        Self { stopwords }
    }

    /// A filter that never matches.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build a filter from an explicit word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add extra stopwords to an existing filter.
    pub fn add(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Case-insensitive membership test.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

fn from_crate(lang: LANGUAGE) -> FxHashSet<String> {
    get(lang).iter().map(|s| s.to_string()).collect()
}

fn builtin(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|s| s.to_string()).collect()
}

// The stop-words crate has no Chinese or Japanese lists; these cover the
// high-frequency function words.
const CHINESE: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及", "这",
    "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于",
    "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
];

const JAPANESE: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる",
    "も", "する", "から", "な", "こと", "として", "い", "や", "など", "ない", "この", "ため",
    "その", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる", "へ", "か",
    "だ", "これ", "によって", "により", "おり",
];
