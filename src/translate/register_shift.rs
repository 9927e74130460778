//! Register adaptation post-processing.
//!
//! Shifts a draft toward the configured target register. Formal-leaning
//! registers expand contractions; conversational registers contract full
//! forms. Substitution is case-preserving for sentence-initial
//! capitalization and every edit lands in the draft's edit log.

use crate::pipeline::artifacts::{Draft, EditKind};
use crate::pipeline::traits::PostProcessor;
use crate::semantics::SemanticFrame;
use crate::types::TranslatorConfig;

/// Contraction pairs as (full form, contraction), lowercase.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("do not", "don't"),
    ("does not", "doesn't"),
    ("did not", "didn't"),
    ("cannot", "can't"),
    ("will not", "won't"),
    ("would not", "wouldn't"),
    ("should not", "shouldn't"),
    ("could not", "couldn't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("was not", "wasn't"),
    ("were not", "weren't"),
    ("have not", "haven't"),
    ("has not", "hasn't"),
    ("it is", "it's"),
    ("that is", "that's"),
    ("we are", "we're"),
    ("they are", "they're"),
    ("i am", "i'm"),
    ("let us", "let's"),
];

/// Shifts drafts toward the configured register.
///
/// Inert when no target register is configured or register preservation
/// is disabled, so it can sit permanently in the standard pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterAdapter;

impl PostProcessor for RegisterAdapter {
    fn post_process(&self, draft: &mut Draft, frame: &SemanticFrame, cfg: &TranslatorConfig) {
        if !cfg.preserve_register {
            return;
        }
        // Honorific-register targets always get the formal shift; the
        // distinction is grammatical, not stylistic.
        let formal = match cfg.register {
            Some(register) => register.is_formal(),
            None if frame.conventions.honorific_register => true,
            None => return,
        };

        if formal {
            expand_contractions(draft);
        } else {
            contract_full_forms(draft);
        }
    }
}

fn expand_contractions(draft: &mut Draft) {
    for &(full, contraction) in CONTRACTIONS {
        replace_all_ci(draft, contraction, full, EditKind::RegisterShift);
    }
}

fn contract_full_forms(draft: &mut Draft) {
    for &(full, contraction) in CONTRACTIONS {
        replace_all_ci(draft, full, contraction, EditKind::RegisterShift);
    }
}

/// Case-insensitive whole-phrase replacement at word boundaries. When the
/// matched span starts with an uppercase letter, the replacement is
/// capitalized too.
///
/// Matching compares case-folded character streams directly, so every
/// byte offset falls on a char boundary of the draft text even when
/// folding changes a character's byte length.
pub(crate) fn replace_all_ci(draft: &mut Draft, from: &str, to: &str, kind: EditKind) {
    let needle: Vec<char> = from.to_lowercase().chars().collect();
    if needle.is_empty() {
        return;
    }

    let mut search_from = 0;
    while search_from < draft.text.len() {
        let Some((rel_start, rel_end)) = find_ci(&draft.text[search_from..], &needle) else {
            break;
        };
        let start = search_from + rel_start;
        let end = search_from + rel_end;

        // Word-boundary guard: no letter or digit directly adjacent.
        let before_ok = draft.text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = draft.text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if before_ok && after_ok {
            search_from = start + apply_at(draft, start, end, to, kind);
        } else {
            // Step one char past the rejected match start.
            let first = draft.text[start..].chars().next().map_or(1, char::len_utf8);
            search_from = start + first;
        }
    }
}

/// First case-insensitive occurrence of `needle` in `text`, as a
/// `(start, end)` byte span on char boundaries.
fn find_ci(text: &str, needle: &[char]) -> Option<(usize, usize)> {
    text.char_indices()
        .find_map(|(start, _)| match_at(text, start, needle).map(|end| (start, end)))
}

/// Match `needle` against the case-folded chars of `text` from the char
/// boundary `start`; returns the end byte offset on success. A character
/// whose folding runs past the needle's end is a mismatch.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, c) in text[start..].char_indices() {
        for folded in c.to_lowercase() {
            if matched == needle.len() || folded != needle[matched] {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(start + offset + c.len_utf8());
        }
    }
    None
}

/// Splice the replacement over `start..end` and log the edit. Returns the
/// replacement's byte length so the caller can resume after it.
fn apply_at(draft: &mut Draft, start: usize, end: usize, to: &str, kind: EditKind) -> usize {
    let matched = draft.text[start..end].to_string();
    let replacement = if matched.chars().next().is_some_and(char::is_uppercase) {
        capitalize(to)
    } else {
        to.to_string()
    };
    let new_text = format!(
        "{}{}{}",
        &draft.text[..start],
        replacement,
        &draft.text[end..]
    );
    let advance = replacement.len();
    draft.apply_edit(kind, &matched, &replacement, new_text);
    advance
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
