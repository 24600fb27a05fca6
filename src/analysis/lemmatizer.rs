use std::collections::{HashMap, HashSet};

/// Reduces a single lowercase token to its dictionary base form.
///
/// Implementations are total: a word they know nothing about comes back
/// unchanged.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Irregular plurals mapped to their singular form
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("businessmen", "businessman"),
    ("chairmen", "chairman"),
    ("congressmen", "congressman"),
    ("spokesmen", "spokesman"),
    ("policemen", "policeman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("wolves", "wolf"),
    ("calves", "calf"),
];

/// Singulars ending in `ie`, which the `ies` rule would turn into `y`
const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "rookie", "selfie", "zombie", "calorie", "brownie", "hippie",
    "smoothie", "genie", "prairie", "goalie", "newbie", "groupie", "boogie",
];

/// Singulars whose plural adds `es`: `-o` nouns and `-us` nouns
const ES_NOUNS: &[&str] = &[
    "hero", "potato", "tomato", "veto", "echo", "torpedo", "embargo", "volcano",
    "bus", "virus", "campus", "bonus", "census", "status", "consensus", "stimulus",
    "surplus", "caucus", "prospectus", "apparatus",
];

/// Words ending in `s` that are already in base form
const INVARIANT_WORDS: &[&str] = &[
    "news", "politics", "economics", "physics", "ethics", "statistics", "athletics",
    "series", "species", "means", "headquarters", "always", "perhaps", "whereas",
    "afterwards", "towards", "besides", "sometimes", "nevertheless", "chaos",
    "texas", "kansas", "arkansas", "lens", "ones", "yes", "alias", "atlas",
    "bias", "canvas", "pancreas",
];

/// Noun suffix rewrites, first match wins. `ies` has its own length guard.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("s", ""),
];

/// Rule-based noun lemmatizer: exception table, invariant words, then
/// plural suffix stripping.
#[derive(Debug, Clone)]
pub struct NounLemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl NounLemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: IRREGULAR_PLURALS.iter().copied().collect(),
            invariant: INVARIANT_WORDS.iter().copied().collect(),
        }
    }

    fn strip_plural(word: &str) -> Option<String> {
        if word.chars().count() <= 3
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
        {
            return None;
        }

        if let Some(stem) = word.strip_suffix('s') {
            if IE_NOUNS.contains(&stem) {
                return Some(stem.to_string());
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if ES_NOUNS.contains(&stem) {
                return Some(stem.to_string());
            }
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return Some(format!("{}y", stem));
            }
        }

        SUFFIX_RULES.iter().find_map(|(suffix, replacement)| {
            word.strip_suffix(suffix)
                .map(|stem| format!("{}{}", stem, replacement))
        })
    }
}

impl Default for NounLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.exceptions.get(word) {
            return (*base).to_string();
        }

        if self.invariant.contains(word) {
            return word.to_string();
        }

        Self::strip_plural(word).unwrap_or_else(|| word.to_string())
    }
}

/// Lemmatizer that leaves every word untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = NounLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("walks"), "walk");
        assert_eq!(lemmatizer.lemmatize("tests"), "test");
        assert_eq!(lemmatizer.lemmatize("policies"), "policy");
        assert_eq!(lemmatizer.lemmatize("speeches"), "speech");
        assert_eq!(lemmatizer.lemmatize("taxes"), "tax");
        assert_eq!(lemmatizer.lemmatize("addresses"), "address");
    }

    #[test]
    fn test_non_plurals_pass_through() {
        let lemmatizer = NounLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("walking"), "walking");
        assert_eq!(lemmatizer.lemmatize("running"), "running");
        assert_eq!(lemmatizer.lemmatize("dog"), "dog");
        assert_eq!(lemmatizer.lemmatize("congress"), "congress");
        assert_eq!(lemmatizer.lemmatize("campus"), "campus");
        assert_eq!(lemmatizer.lemmatize("analysis"), "analysis");
        assert_eq!(lemmatizer.lemmatize("news"), "news");
        assert_eq!(lemmatizer.lemmatize("gas"), "gas");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = NounLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("women"), "woman");
        assert_eq!(lemmatizer.lemmatize("crises"), "crisis");
        assert_eq!(lemmatizer.lemmatize("lives"), "life");
    }

    #[test]
    fn test_ie_and_es_plurals() {
        let lemmatizer = NounLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("movies"), "movie");
        assert_eq!(lemmatizer.lemmatize("cookies"), "cookie");
        assert_eq!(lemmatizer.lemmatize("rookies"), "rookie");
        assert_eq!(lemmatizer.lemmatize("selfies"), "selfie");
        assert_eq!(lemmatizer.lemmatize("heroes"), "hero");
        assert_eq!(lemmatizer.lemmatize("buses"), "bus");
        assert_eq!(lemmatizer.lemmatize("viruses"), "virus");
        assert_eq!(lemmatizer.lemmatize("cities"), "city");
        assert_eq!(lemmatizer.lemmatize("causes"), "cause");
    }

    #[test]
    fn test_output_is_stable() {
        let lemmatizer = NounLemmatizer::new();

        for word in [
            "voters", "cities", "glasses", "children", "campaigns", "lies", "movies", "heroes",
            "buses",
        ] {
            let once = lemmatizer.lemmatize(word);
            assert_eq!(lemmatizer.lemmatize(&once), once, "unstable on {}", word);
        }
    }

    #[test]
    fn test_identity_lemmatizer() {
        assert_eq!(IdentityLemmatizer.lemmatize("tests"), "tests");
    }
}
