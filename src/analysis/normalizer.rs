//! Text normalization for word-frequency and unique-word comparison.
//!
//! The stages run in a fixed order and each assumes the output shape of the
//! previous one:
//!
//! 1. `clean_text`: lowercase, unify apostrophes, drop possessive `'s`,
//!    strip punctuation, trim.
//! 2. `remove_stopwords`: drop stopwords and single-character tokens.
//! 3. `lemmatize_text`: reduce each token to its base form.
//!
//! `normalize` composes the three and reports "nothing left" as `None`,
//! never as an empty string.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

use super::lemmatizer::{Lemmatizer, NounLemmatizer};
use super::stopwords::StopwordSet;

static POSSESSIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\w+)'s\b").unwrap());

static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Apostrophe variants found in scraped pages, including the UTF-8 mojibake of `’`
const APOSTROPHE_VARIANTS: &[&str] = &["â€™", "\u{2019}", "\u{2018}"];

/// Replace every apostrophe variant with a plain `'`
pub(crate) fn unify_apostrophes(text: &str) -> String {
    let mut text = text.to_string();
    for variant in APOSTROPHE_VARIANTS {
        if text.contains(variant) {
            text = text.replace(variant, "'");
        }
    }
    text
}

#[derive(Clone)]
pub struct TextNormalizer {
    stopwords: Arc<StopwordSet>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl TextNormalizer {
    pub fn new(stopwords: StopwordSet, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
            lemmatizer,
        }
    }

    /// Lowercase, normalize apostrophes, remove possessives and punctuation
    pub fn clean_text(&self, text: &str) -> String {
        let text = unify_apostrophes(&text.to_lowercase());
        let text = POSSESSIVE_RE.replace_all(&text, "${1}");
        let text = PUNCTUATION_RE.replace_all(&text, "");
        text.trim().to_string()
    }

    /// Drop stopwords and tokens of a single character
    pub fn remove_stopwords(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stopwords.contains(word) && word.chars().count() > 1)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn lemmatize_text(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.lemmatizer.lemmatize(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run all stages; `None` when no token survives
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let text = self.clean_text(raw);
        let text = self.remove_stopwords(&text);
        let text = self.lemmatize_text(&text);

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Normalize a batch in parallel, keeping input order and dropping
    /// texts without usable content
    pub fn normalize_all<'a, I>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let texts: Vec<&str> = texts.into_iter().collect();
        texts
            .par_iter()
            .filter_map(|text| self.normalize(text))
            .collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(StopwordSet::english(), Arc::new(NounLemmatizer::new()))
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}
