use rayon::prelude::*;
use tracing::{info, warn};

use crate::analysis::TextNormalizer;
use crate::domain::{Article, ListedArticle, Subject, SubjectReport};
use crate::errors::DashboardResult;
use crate::scoring::SentimentScorer;
use crate::sources::ArticleSource;

pub struct AnalysisService<S: ArticleSource, C: SentimentScorer> {
    source: S,
    scorer: C,
    normalizer: TextNormalizer,
}

impl<S: ArticleSource, C: SentimentScorer> AnalysisService<S, C> {
    pub fn new(source: S, scorer: C, normalizer: TextNormalizer) -> Self {
        Self {
            source,
            scorer,
            normalizer,
        }
    }

    /// Fetch, score and classify a single listed article
    pub fn analyze_article(&self, listed: &ListedArticle) -> DashboardResult<Article> {
        let extracted = self.source.fetch_article(listed)?;
        let score = self.scorer.score(&extracted.content)?;
        Article::classified(extracted, score)
    }

    /// Analyze every listed article of a subject.
    /// Articles that fail are logged and left out; a failed listing is an error.
    pub fn analyze_subject(&self, subject: Subject) -> DashboardResult<SubjectReport> {
        let listed = self.source.list_article_urls(subject)?;
        info!("Analyzing {} articles for {}", listed.len(), subject);

        let articles: Vec<Article> = listed
            .par_iter()
            .filter_map(|entry| match self.analyze_article(entry) {
                Ok(article) => Some(article),
                Err(e) => {
                    // Log error but continue with other articles
                    warn!("Skipping {}: {}", entry.url, e);
                    None
                }
            })
            .collect();

        if articles.len() < listed.len() {
            warn!(
                "{} of {} articles for {} could not be analyzed",
                listed.len() - articles.len(),
                listed.len(),
                subject
            );
        }

        Ok(SubjectReport::new(subject, articles, &self.normalizer))
    }

    /// Analyze several subjects one after another
    pub fn analyze_subjects(&self, subjects: &[Subject]) -> DashboardResult<Vec<SubjectReport>> {
        subjects
            .iter()
            .map(|subject| self.analyze_subject(*subject))
            .collect()
    }
}
