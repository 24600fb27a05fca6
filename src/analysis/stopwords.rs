use std::collections::HashSet;

/// Standard English stopword list, one word per line
const ENGLISH: &str = include_str!("words/english");

/// Words that carry no meaning in scraped news pages
pub const CUSTOM_STOPWORDS: &[&str] = &["fullscreen", "image", "ago", "cet", "US", "said", "view"];

pub const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty",
    "sixty", "seventy", "eighty", "ninety", "hundred", "thousand", "million", "billion",
];

/// Immutable set of lowercase stopwords.
///
/// Built once at startup and handed to the normalizer; lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Standard English stopwords plus the custom and number-word lists
    pub fn english() -> Self {
        Self::from_words(ENGLISH.lines().map(str::trim).filter(|l| !l.is_empty()))
            .with_extra(CUSTOM_STOPWORDS)
            .with_extra(NUMBER_WORDS)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns a copy extended with `extra` words
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Tokens are usually lowercase already; only allocate when they aren't
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_set_contains_all_lists() {
        let stopwords = StopwordSet::english();

        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("don't"));
        assert!(stopwords.contains("us"));
        assert!(stopwords.contains("cet"));
        assert!(stopwords.contains("thousand"));
        assert!(!stopwords.contains("dog"));
        assert!(!stopwords.contains("walking"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let stopwords = StopwordSet::english();

        assert!(stopwords.contains("US"));
        assert!(stopwords.contains("The"));
        assert!(!stopwords.contains("Donald"));
    }

    #[test]
    fn test_with_extra() {
        let stopwords = StopwordSet::from_words(["alpha"]).with_extra(["Beta"]);

        assert_eq!(stopwords.len(), 2);
        assert!(stopwords.contains("beta"));
        assert!(!stopwords.is_empty());
    }

    #[test]
    fn test_english_size() {
        // 179 standard words, custom and number lists do not overlap with them
        let stopwords = StopwordSet::english();
        assert_eq!(
            stopwords.len(),
            179 + CUSTOM_STOPWORDS.len() + NUMBER_WORDS.len()
        );
    }
}
