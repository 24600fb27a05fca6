use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{classify_polarity, classify_subjectivity};
use crate::errors::DashboardResult;

use super::{PolarityClass, SentimentScore, SubjectivityClass};

/// Entry of an article listing, before the page itself is fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedArticle {
    pub url: String,
    pub title: String,
    pub published: Option<String>,
}

impl ListedArticle {
    pub fn new(url: String, title: String) -> Self {
        Self {
            url,
            title,
            published: None,
        }
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }
}

/// Article text and title as extracted from its page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub url: String,
    pub title: String,
    pub content: String,
    pub published: Option<String>,
}

impl ExtractedArticle {
    pub fn new(url: String, title: String, content: String) -> Self {
        Self {
            url,
            title,
            content,
            published: None,
        }
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }
}

/// A scored and classified article. Labels always agree with the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub url: String,
    pub published: Option<String>,
    pub polarity: f64,
    pub subjectivity: f64,
    pub polarity_class: PolarityClass,
    pub subjectivity_class: SubjectivityClass,
}

impl Article {
    pub fn classified(extracted: ExtractedArticle, score: SentimentScore) -> DashboardResult<Self> {
        let polarity_class = classify_polarity(score.polarity)?;
        let subjectivity_class = classify_subjectivity(score.subjectivity)?;

        Ok(Self {
            title: extracted.title,
            content: extracted.content,
            url: extracted.url,
            published: extracted.published,
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            polarity_class,
            subjectivity_class,
        })
    }
}
