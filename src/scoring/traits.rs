use crate::domain::SentimentScore;
use crate::errors::DashboardResult;

#[cfg_attr(test, mockall::automock)]
pub trait SentimentScorer: Send + Sync {
    /// Polarity in [-1, 1] and subjectivity in [0, 1] of a text
    fn score(&self, text: &str) -> DashboardResult<SentimentScore>;
}
