pub mod classifier;
pub mod compare;
pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

pub use classifier::{classify, classify_polarity, classify_subjectivity};
pub use compare::{unique_words, word_frequencies, Comparison, ScoreSummary, SubjectStats};
pub use lemmatizer::{IdentityLemmatizer, Lemmatizer, NounLemmatizer};
pub use normalizer::TextNormalizer;
pub use stopwords::StopwordSet;
