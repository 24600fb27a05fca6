pub mod lexicon;
pub mod traits;

pub use lexicon::LexiconScorer;
pub use traits::SentimentScorer;
