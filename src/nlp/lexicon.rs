//! Marker lexicon — the data tables behind the SFL heuristics.
//!
//! Every analyzer is lookup-driven: process types come from marker verbs,
//! modality from a graded modal table, register from field term lists and
//! formality markers, cohesion from a conjunctive-adjunct list. The
//! built-in tables cover English; callers can extend or replace any table
//! for domain-specific text.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::{ModalityDegree, ProcessType};

/// Lexical resources consulted by the SFL feature extractor.
#[derive(Debug, Clone)]
pub struct MarkerLexicon {
    verbal: FxHashSet<String>,
    mental: FxHashSet<String>,
    material: FxHashSet<String>,
    behavioral: FxHashSet<String>,
    copulas: FxHashSet<String>,
    auxiliaries: FxHashSet<String>,
    modality: FxHashMap<String, ModalityDegree>,
    formal_markers: FxHashSet<String>,
    casual_markers: FxHashSet<String>,
    business_terms: FxHashSet<String>,
    technical_terms: FxHashSet<String>,
    academic_terms: FxHashSet<String>,
    cohesion_markers: Vec<String>,
    time_words: FxHashSet<String>,
    time_prepositions: FxHashSet<String>,
    place_prepositions: FxHashSet<String>,
    manner_prepositions: FxHashSet<String>,
    determiners: FxHashSet<String>,
}

impl Default for MarkerLexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl MarkerLexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self {
            verbal: set(&[
                "say", "says", "said", "saying", "announce", "announces", "announced", "tell",
                "tells", "told", "ask", "asks", "asked", "reply", "replies", "replied", "state",
                "states", "stated", "declare", "declares", "declared", "report", "reports",
                "reported",
            ]),
            mental: set(&[
                "think", "thinks", "thought", "believe", "believes", "believed", "know", "knows",
                "knew", "feel", "feels", "felt", "consider", "considers", "considered",
                "understand", "understands", "understood", "wonder", "wonders", "wondered",
                "hope", "hopes", "hoped", "remember", "remembers", "remembered",
            ]),
            material: set(&[
                "do", "does", "did", "make", "makes", "made", "create", "creates", "created",
                "build", "builds", "built", "review", "reviews", "reviewed", "develop",
                "develops", "developed", "produce", "produces", "produced", "write", "writes",
                "wrote", "submit", "submits", "submitted", "send", "sends", "sent", "sign",
                "signs", "signed", "open", "opens", "opened", "close", "closes", "closed",
            ]),
            behavioral: set(&[
                "laugh", "laughs", "laughed", "cry", "cries", "cried", "watch", "watches",
                "watched", "listen", "listens", "listened", "breathe", "breathes", "breathed",
                "smile", "smiles", "smiled", "stare", "stares", "stared", "sleep", "sleeps",
                "slept",
            ]),
            copulas: set(&[
                "is", "are", "was", "were", "be", "been", "being", "am", "seem", "seems",
                "seemed", "become", "becomes", "became", "remain", "remains", "remained",
            ]),
            auxiliaries: set(&[
                "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did",
                "have", "has", "had", "will", "would", "shall", "should", "can", "could", "may",
                "might", "must", "ought", "need",
            ]),
            modality: modal_table(),
            formal_markers: set(&[
                "shall", "herein", "aforementioned", "hereby", "pursuant", "notwithstanding",
                "whom", "henceforth", "thereof",
            ]),
            casual_markers: set(&[
                "gonna", "wanna", "gotta", "kinda", "sorta", "yeah", "hey", "stuff", "cool",
                "okay", "ok",
            ]),
            business_terms: set(&[
                "committee", "merger", "ceo", "proposal", "stakeholder", "stakeholders",
                "quarterly", "revenue", "shareholder", "shareholders", "agenda", "deadline",
                "invoice", "contract",
            ]),
            technical_terms: set(&[
                "algorithm", "server", "database", "protocol", "compiler", "latency", "kernel",
                "interface", "bandwidth", "runtime", "pipeline", "encryption",
            ]),
            academic_terms: set(&[
                "hypothesis", "methodology", "literature", "empirical", "thesis", "citation",
                "corpus", "findings", "abstract", "peer-reviewed",
            ]),
            cohesion_markers: vec![
                "however",
                "therefore",
                "moreover",
                "thus",
                "furthermore",
                "nevertheless",
                "consequently",
                "meanwhile",
                "instead",
                "finally",
                "additionally",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            time_words: set(&[
                "week", "weeks", "today", "tomorrow", "yesterday", "year", "years", "month",
                "months", "day", "days", "monday", "tuesday", "wednesday", "thursday", "friday",
                "saturday", "sunday", "morning", "afternoon", "evening", "tonight", "soon",
                "later", "now", "quarter",
            ]),
            time_prepositions: set(&["during", "until", "before", "after", "since"]),
            place_prepositions: set(&[
                "in", "on", "at", "near", "under", "over", "behind", "inside", "outside",
                "between",
            ]),
            manner_prepositions: set(&["with", "by", "without", "via", "through"]),
            determiners: set(&["the", "a", "an", "this", "that", "these", "those"]),
        }
    }

    // ─── Process markers ────────────────────────────────────────────────

    /// Classify a lemma as a process-marker verb, if it is one.
    ///
    /// Copulas are reported as relational; auxiliaries that double as
    /// copulas are resolved by the transitivity analyzer in context.
    pub fn process_type_of(&self, lemma: &str) -> Option<ProcessType> {
        if self.verbal.contains(lemma) {
            Some(ProcessType::Verbal)
        } else if self.mental.contains(lemma) {
            Some(ProcessType::Mental)
        } else if self.material.contains(lemma) {
            Some(ProcessType::Material)
        } else if self.behavioral.contains(lemma) {
            Some(ProcessType::Behavioral)
        } else if self.copulas.contains(lemma) {
            Some(ProcessType::Relational)
        } else {
            None
        }
    }

    /// Whether `lemma` is a non-copular process verb (used for
    /// imperative detection).
    pub fn is_lexical_verb(&self, lemma: &str) -> bool {
        self.verbal.contains(lemma)
            || self.mental.contains(lemma)
            || self.material.contains(lemma)
            || self.behavioral.contains(lemma)
    }

    pub fn is_copula(&self, lemma: &str) -> bool {
        self.copulas.contains(lemma)
    }

    pub fn is_auxiliary(&self, lemma: &str) -> bool {
        self.auxiliaries.contains(lemma)
    }

    pub fn is_determiner(&self, lemma: &str) -> bool {
        self.determiners.contains(lemma)
    }

    // ─── Modality ───────────────────────────────────────────────────────

    pub fn modality_of(&self, lemma: &str) -> Option<ModalityDegree> {
        self.modality.get(lemma).copied()
    }

    // ─── Register markers ───────────────────────────────────────────────

    pub fn is_formal_marker(&self, lemma: &str) -> bool {
        self.formal_markers.contains(lemma)
    }

    pub fn is_casual_marker(&self, lemma: &str) -> bool {
        self.casual_markers.contains(lemma)
    }

    pub fn is_business_term(&self, lemma: &str) -> bool {
        self.business_terms.contains(lemma)
    }

    pub fn is_technical_term(&self, lemma: &str) -> bool {
        self.technical_terms.contains(lemma)
    }

    pub fn is_academic_term(&self, lemma: &str) -> bool {
        self.academic_terms.contains(lemma)
    }

    // ─── Cohesion ───────────────────────────────────────────────────────

    pub fn cohesion_markers(&self) -> &[String] {
        &self.cohesion_markers
    }

    pub fn is_cohesion_marker(&self, lemma: &str) -> bool {
        self.cohesion_markers.iter().any(|m| m == lemma)
    }

    // ─── Circumstance cues ──────────────────────────────────────────────

    pub fn is_time_word(&self, lemma: &str) -> bool {
        self.time_words.contains(lemma)
    }

    pub fn is_time_preposition(&self, lemma: &str) -> bool {
        self.time_prepositions.contains(lemma)
    }

    pub fn is_place_preposition(&self, lemma: &str) -> bool {
        self.place_prepositions.contains(lemma)
    }

    pub fn is_manner_preposition(&self, lemma: &str) -> bool {
        self.manner_prepositions.contains(lemma)
    }

    // ─── Extension points ───────────────────────────────────────────────

    /// Add marker verbs for one process type.
    pub fn add_process_markers(&mut self, process: ProcessType, lemmas: &[&str]) {
        let target = match process {
            ProcessType::Verbal => &mut self.verbal,
            ProcessType::Mental => &mut self.mental,
            ProcessType::Material => &mut self.material,
            ProcessType::Behavioral => &mut self.behavioral,
            ProcessType::Relational => &mut self.copulas,
            // Existential clauses are cued structurally ("there" + copula),
            // not by marker verbs.
            ProcessType::Existential => return,
        };
        for lemma in lemmas {
            target.insert(lemma.to_lowercase());
        }
    }

    /// Add domain terms to a field list.
    pub fn add_field_terms(&mut self, field: &str, terms: &[&str]) {
        let target = match field {
            "business" => &mut self.business_terms,
            "technical" => &mut self.technical_terms,
            "academic" => &mut self.academic_terms,
            _ => return,
        };
        for term in terms {
            target.insert(term.to_lowercase());
        }
    }
}

fn set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn modal_table() -> FxHashMap<String, ModalityDegree> {
    let mut table = FxHashMap::default();
    for (lemma, degree) in [
        ("can", ModalityDegree::Low),
        ("could", ModalityDegree::Low),
        ("may", ModalityDegree::Low),
        ("might", ModalityDegree::Low),
        ("will", ModalityDegree::Median),
        ("would", ModalityDegree::Median),
        ("should", ModalityDegree::Median),
        ("shall", ModalityDegree::Median),
        ("must", ModalityDegree::High),
        ("ought", ModalityDegree::High),
        ("need", ModalityDegree::High),
    ] {
        table.insert(lemma.to_string(), degree);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_marker_classification() {
        let lex = MarkerLexicon::english();
        assert_eq!(lex.process_type_of("said"), Some(ProcessType::Verbal));
        assert_eq!(lex.process_type_of("believe"), Some(ProcessType::Mental));
        assert_eq!(lex.process_type_of("built"), Some(ProcessType::Material));
        assert_eq!(lex.process_type_of("laughed"), Some(ProcessType::Behavioral));
        assert_eq!(lex.process_type_of("is"), Some(ProcessType::Relational));
        assert_eq!(lex.process_type_of("committee"), None);
    }

    #[test]
    fn test_modality_degrees() {
        let lex = MarkerLexicon::english();
        assert_eq!(lex.modality_of("might"), Some(ModalityDegree::Low));
        assert_eq!(lex.modality_of("will"), Some(ModalityDegree::Median));
        assert_eq!(lex.modality_of("must"), Some(ModalityDegree::High));
        assert_eq!(lex.modality_of("review"), None);
    }

    #[test]
    fn test_field_terms() {
        let lex = MarkerLexicon::english();
        assert!(lex.is_business_term("merger"));
        assert!(lex.is_technical_term("latency"));
        assert!(lex.is_academic_term("methodology"));
        assert!(!lex.is_business_term("fox"));
    }

    #[test]
    fn test_cohesion_marker_lookup() {
        let lex = MarkerLexicon::english();
        assert!(lex.is_cohesion_marker("however"));
        assert!(lex.is_cohesion_marker("therefore"));
        assert!(!lex.is_cohesion_marker("committee"));
    }

    #[test]
    fn test_add_process_markers() {
        let mut lex = MarkerLexicon::english();
        assert_eq!(lex.process_type_of("whisper"), None);
        lex.add_process_markers(ProcessType::Verbal, &["whisper", "whispered"]);
        assert_eq!(lex.process_type_of("whispered"), Some(ProcessType::Verbal));
    }

    #[test]
    fn test_add_field_terms() {
        let mut lex = MarkerLexicon::english();
        lex.add_field_terms("technical", &["quaternion"]);
        assert!(lex.is_technical_term("quaternion"));
    }

    #[test]
    fn test_circumstance_cues() {
        let lex = MarkerLexicon::english();
        assert!(lex.is_time_word("week"));
        assert!(lex.is_place_preposition("in"));
        assert!(lex.is_manner_preposition("with"));
        assert!(lex.is_time_preposition("during"));
    }
}
