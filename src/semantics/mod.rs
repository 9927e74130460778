//! Cross-linguistic semantic representation.
//!
//! The [`SemanticFrame`] is the language-neutral hand-off between analysis
//! and generation: speech function, process configuration, thematic
//! structure, source register, and the target-language conventions the
//! generator and post-processors should respect.

use serde::{Deserialize, Serialize};

use crate::analysis::{Circumstance, Participant, RegisterProfile, SflAnalysis};
use crate::types::{ProcessType, SpeechFunction, TranslatorConfig};

/// Typological conventions of the target language that bear on
/// generation and post-processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConventions {
    /// Grammaticalized honorific register (ja, ko): register shifts are
    /// mandatory, not stylistic.
    pub honorific_register: bool,
    /// T/V second-person formality distinction (de, fr, es, ...).
    pub tv_distinction: bool,
    /// Topic-prominent clause structure (ja, zh): theme preservation
    /// maps to topic marking.
    pub topic_prominent: bool,
}

/// Look up conventions for an ISO 639-1 target code.
pub fn conventions_for(target_lang: &str) -> TargetConventions {
    match target_lang {
        "ja" | "ko" => TargetConventions {
            honorific_register: true,
            tv_distinction: false,
            topic_prominent: true,
        },
        "zh" => TargetConventions {
            honorific_register: false,
            tv_distinction: false,
            topic_prominent: true,
        },
        "de" | "fr" | "es" | "it" | "pt" | "nl" | "ru" => TargetConventions {
            honorific_register: false,
            tv_distinction: true,
            topic_prominent: false,
        },
        _ => TargetConventions::default(),
    }
}

/// Language-neutral semantic representation of the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticFrame {
    pub speech_function: SpeechFunction,
    pub process_type: ProcessType,
    /// Participants of the dominant clause.
    pub participants: Vec<Participant>,
    /// Circumstances of the dominant clause.
    pub circumstances: Vec<Circumstance>,
    /// Document theme.
    pub theme: String,
    pub source_register: RegisterProfile,
    pub cohesion_markers: Vec<String>,
    pub conventions: TargetConventions,
}

impl SemanticFrame {
    /// Build a frame from the document analysis and the target language.
    pub fn from_analysis(analysis: &SflAnalysis, cfg: &TranslatorConfig) -> Self {
        let dominant = analysis.dominant_clause();
        Self {
            speech_function: analysis.mood.into(),
            process_type: analysis.process_type,
            participants: dominant
                .map(|c| c.transitivity.participants.clone())
                .unwrap_or_default(),
            circumstances: dominant
                .map(|c| c.transitivity.circumstances.clone())
                .unwrap_or_default(),
            theme: analysis.theme.clone(),
            source_register: analysis.register.clone(),
            cohesion_markers: analysis.cohesion_markers.clone(),
            conventions: conventions_for(&cfg.target_lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_stream;
    use crate::nlp::lexicon::MarkerLexicon;
    use crate::nlp::tokenizer::Tokenizer;
    use crate::types::Mood;

    fn frame(text: &str, target: &str) -> SemanticFrame {
        let stream = Tokenizer::new("en").tokenize(text);
        let analysis = analyze_stream(&stream, &MarkerLexicon::english());
        SemanticFrame::from_analysis(&analysis, &TranslatorConfig::new("en", target))
    }

    #[test]
    fn test_conventions_lookup() {
        assert!(conventions_for("ja").honorific_register);
        assert!(conventions_for("ja").topic_prominent);
        assert!(conventions_for("de").tv_distinction);
        assert!(!conventions_for("en").tv_distinction);
        assert_eq!(conventions_for("sw"), TargetConventions::default());
    }

    #[test]
    fn test_frame_carries_dominant_clause_roles() {
        let f = frame("She said the meeting was postponed.", "de");
        assert_eq!(f.process_type, ProcessType::Verbal);
        assert_eq!(f.participants[0].role, "Sayer");
        assert_eq!(f.speech_function, SpeechFunction::Statement);
        assert!(f.conventions.tv_distinction);
    }

    #[test]
    fn test_question_maps_to_question_function() {
        let f = frame("Is the meeting postponed?", "fr");
        assert_eq!(f.speech_function, SpeechFunction::Question);
    }

    #[test]
    fn test_empty_analysis_frame() {
        let analysis = crate::analysis::SflAnalysis::empty();
        let f = SemanticFrame::from_analysis(&analysis, &TranslatorConfig::default());
        assert!(f.participants.is_empty());
        assert_eq!(f.speech_function, SpeechFunction::Statement);
        assert_eq!(analysis.mood, Mood::Declarative);
    }
}
