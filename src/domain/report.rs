use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;

use super::{Article, Subject};

/// Analyzed coverage of one subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectReport {
    pub subject: Subject,
    pub articles: Vec<Article>,
    /// Normalized article contents; articles without usable content are left out
    pub cleaned: Vec<String>,
}

impl SubjectReport {
    pub fn new(subject: Subject, articles: Vec<Article>, normalizer: &TextNormalizer) -> Self {
        let cleaned = normalizer.normalize_all(articles.iter().map(|a| a.content.as_str()));

        Self {
            subject,
            articles,
            cleaned,
        }
    }

    pub fn polarities(&self) -> Vec<f64> {
        self.articles.iter().map(|a| a.polarity).collect()
    }

    pub fn subjectivities(&self) -> Vec<f64> {
        self.articles.iter().map(|a| a.subjectivity).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
