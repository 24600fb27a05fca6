// Lexicon-based sentiment scoring.
// Every known word carries a (polarity, subjectivity) pair; the text score is
// the mean over the words found, after intensifier and negation adjustments.
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::normalizer::unify_apostrophes;
use crate::domain::SentimentScore;
use crate::errors::DashboardResult;
use crate::scoring::traits::SentimentScorer;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").unwrap());

static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "very", "extremely", "absolutely", "really", "incredibly", "highly", "totally",
        "deeply", "truly", "so",
    ]
    .iter()
    .copied()
    .collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "none",
        "cannot", "without",
    ]
    .iter()
    .copied()
    .collect()
});

const INTENSIFIER_WEIGHT: f64 = 1.3;
const NEGATION_WEIGHT: f64 = -0.5;

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("fantastic", 0.4, 0.9),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("happy", 0.8, 1.0),
    ("love", 0.5, 0.6),
    ("strong", 0.43, 0.73),
    ("successful", 0.75, 0.95),
    ("popular", 0.6, 0.8),
    ("fair", 0.7, 0.9),
    ("true", 0.35, 0.65),
    ("free", 0.4, 0.8),
    ("important", 0.4, 1.0),
    ("historic", 0.2, 0.4),
    ("hopeful", 0.5, 0.8),
    ("proud", 0.8, 1.0),
    ("safe", 0.5, 0.5),
    ("first", 0.25, 0.33),
    ("new", 0.14, 0.45),
    ("high", 0.16, 0.54),
    ("real", 0.2, 0.3),
    ("clear", 0.1, 0.38),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("negative", -0.3, 0.4),
    ("angry", -0.5, 1.0),
    ("sad", -0.5, 1.0),
    ("wrong", -0.5, 0.9),
    ("false", -0.4, 0.6),
    ("dangerous", -0.6, 0.9),
    ("weak", -0.375, 0.625),
    ("crazy", -0.6, 0.9),
    ("dishonest", -0.6, 0.8),
    ("unfair", -0.5, 0.9),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("serious", -0.33, 0.67),
    ("illegal", -0.5, 0.5),
    ("violent", -0.8, 0.9),
    ("chaotic", -0.4, 0.7),
    ("failed", -0.5, 0.3),
    ("guilty", -0.5, 0.7),
    ("low", 0.0, 0.3),
    ("likely", 0.0, 1.0),
    ("possible", 0.0, 1.0),
    ("political", 0.0, 0.1),
    ("public", 0.0, 0.07),
    ("former", 0.0, 0.0),
];

pub struct LexiconScorer {
    lexicon: HashMap<&'static str, (f64, f64)>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON
                .iter()
                .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
                .collect(),
        }
    }

    fn is_negation(word: &str) -> bool {
        NEGATIONS.contains(word) || word.ends_with("n't")
    }

    pub fn score_text(&self, text: &str) -> SentimentScore {
        let lowered = unify_apostrophes(&text.to_lowercase());
        let words: Vec<&str> = WORD_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().trim_matches('\''))
            .filter(|w| !w.is_empty())
            .collect();

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut assessed = 0usize;

        for (i, word) in words.iter().enumerate() {
            let Some(&(mut polarity, mut subjectivity)) = self.lexicon.get(*word) else {
                continue;
            };

            if i > 0 && INTENSIFIERS.contains(words[i - 1]) {
                polarity *= INTENSIFIER_WEIGHT;
                subjectivity *= INTENSIFIER_WEIGHT;
            }

            // Negation reaches back two words: "not a good", "never very good"
            let negated = (i > 0 && Self::is_negation(words[i - 1]))
                || (i > 1 && Self::is_negation(words[i - 2]));
            if negated {
                polarity *= NEGATION_WEIGHT;
            }

            polarity_sum += polarity;
            subjectivity_sum += subjectivity;
            assessed += 1;
        }

        if assessed == 0 {
            return SentimentScore::neutral();
        }

        SentimentScore::new(
            (polarity_sum / assessed as f64).clamp(-1.0, 1.0),
            (subjectivity_sum / assessed as f64).clamp(0.0, 1.0),
        )
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> DashboardResult<SentimentScore> {
        Ok(self.score_text(text))
    }
}
