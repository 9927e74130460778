//! Cultural localization post-processing.
//!
//! Substitutes region-appropriate idioms into the draft. Tables are keyed
//! by `"{lang}-{REGION}"` with a `"{lang}"` fallback, so `es-MX` entries
//! shadow the general Spanish ones. Inert unless cultural adaptation is
//! enabled and a region is configured.

use rustc_hash::FxHashMap;

use crate::pipeline::artifacts::{Draft, EditKind};
use crate::pipeline::traits::PostProcessor;
use crate::semantics::SemanticFrame;
use crate::translate::register_shift::replace_all_ci;
use crate::types::TranslatorConfig;

/// Region-aware idiom substitution tables.
#[derive(Debug, Clone)]
pub struct CulturalLocalizer {
    /// `lang` or `lang-REGION` key to `(source idiom, localized idiom)`
    /// pairs.
    idioms: FxHashMap<String, Vec<(String, String)>>,
}

impl Default for CulturalLocalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CulturalLocalizer {
    /// Localizer with no tables; substitutes nothing until entries are
    /// added.
    pub fn new() -> Self {
        Self {
            idioms: FxHashMap::default(),
        }
    }

    /// The built-in idiom tables.
    pub fn builtin() -> Self {
        let mut localizer = Self::new();
        for (source, target) in [
            ("raining cats and dogs", "lloviendo a cántaros"),
            ("piece of cake", "pan comido"),
            ("break a leg", "mucha suerte"),
            ("once in a blue moon", "de Pascuas a Ramos"),
        ] {
            localizer.add_idiom("es", source, target);
        }
        // Mexican Spanish: regional variant shadows the general entry.
        localizer.add_idiom("es-MX", "piece of cake", "pan comido, facilísimo");

        for (source, target) in [
            ("raining cats and dogs", "es regnet in Strömen"),
            ("piece of cake", "ein Kinderspiel"),
        ] {
            localizer.add_idiom("de", source, target);
        }

        for (source, target) in [
            ("raining cats and dogs", "il pleut des cordes"),
            ("piece of cake", "du gâteau"),
        ] {
            localizer.add_idiom("fr", source, target);
        }

        localizer
    }

    /// Register an idiom substitution for a language or `lang-REGION` key.
    pub fn add_idiom(&mut self, key: &str, source: &str, target: &str) {
        self.idioms
            .entry(normalize_key(key))
            .or_default()
            .push((source.to_string(), target.to_string()));
    }

    /// Substitution pairs for a target language and region: regional
    /// entries first, then the language-level fallback.
    fn pairs_for(&self, lang: &str, region: &str) -> Vec<&(String, String)> {
        let regional_key = normalize_key(&format!("{lang}-{region}"));
        let mut pairs: Vec<&(String, String)> = Vec::new();
        if let Some(regional) = self.idioms.get(&regional_key) {
            pairs.extend(regional.iter());
        }
        if let Some(general) = self.idioms.get(&lang.to_lowercase()) {
            pairs.extend(general.iter());
        }
        pairs
    }
}

/// `lang` lowercase, `REGION` uppercase.
fn normalize_key(key: &str) -> String {
    match key.split_once('-') {
        Some((lang, region)) => format!("{}-{}", lang.to_lowercase(), region.to_uppercase()),
        None => key.to_lowercase(),
    }
}

impl PostProcessor for CulturalLocalizer {
    fn post_process(&self, draft: &mut Draft, _frame: &SemanticFrame, cfg: &TranslatorConfig) {
        if !cfg.cultural_adaptation {
            return;
        }
        let Some(region) = cfg.region.as_deref() else {
            return;
        };

        let mut seen: Vec<&str> = Vec::new();
        for (source, target) in self.pairs_for(&cfg.target_lang, region) {
            // Regional entries shadow language-level ones for the same
            // source idiom.
            if seen.contains(&source.as_str()) {
                continue;
            }
            seen.push(source.as_str());
            replace_all_ci(draft, source, target, EditKind::IdiomSubstitution);
        }
    }
}
