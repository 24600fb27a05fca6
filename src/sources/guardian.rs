use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::domain::{ExtractedArticle, ListedArticle, Subject};
use crate::errors::{DashboardError, DashboardResult};
use crate::sources::extractor::HtmlExtractor;
use crate::sources::traits::ArticleSource;

#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    response: Option<ListingBody>,
}

#[derive(Debug, Deserialize)]
struct ListingBody {
    results: Option<Vec<ListingResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingResult {
    web_url: String,
    web_title: Option<String>,
    web_publication_date: Option<String>,
}

/// Article source backed by the Guardian content API
pub struct GuardianSource {
    client: Client,
    extractor: HtmlExtractor,
    api_url: String,
    api_key: String,
    page_size: usize,
    limit: usize,
}

impl GuardianSource {
    pub fn new(config: &Config) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            extractor: HtmlExtractor::new(),
            api_url: config.guardian_api_url.trim_end_matches('/').to_string(),
            api_key: config.guardian_api_key.clone(),
            page_size: config.page_size,
            limit: config.article_limit,
        })
    }

    /// Build the section listing URL for a subject
    fn listing_url(&self, subject: Subject) -> DashboardResult<Url> {
        let endpoint = format!("{}/{}", self.api_url, subject.section());
        let page_size = self.page_size.to_string();

        Url::parse_with_params(
            &endpoint,
            &[
                ("api-key", self.api_key.as_str()),
                ("show-fields", "all"),
                ("page-size", page_size.as_str()),
            ],
        )
        .map_err(|e| DashboardError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }

    /// Parse a listing response body, keeping at most `limit` articles
    fn parse_listing(body: &str, limit: usize) -> DashboardResult<Vec<ListedArticle>> {
        let envelope: ListingEnvelope = serde_json::from_str(body)?;

        let results = match envelope.response.and_then(|r| r.results) {
            Some(results) => results,
            None => {
                warn!("No articles found in listing response");
                return Ok(Vec::new());
            }
        };

        Ok(results
            .into_iter()
            .take(limit)
            .map(|r| {
                ListedArticle::new(r.web_url, r.web_title.unwrap_or_default())
                    .with_published(r.web_publication_date)
            })
            .collect())
    }
}

impl ArticleSource for GuardianSource {
    fn list_article_urls(&self, subject: Subject) -> DashboardResult<Vec<ListedArticle>> {
        let url = self.listing_url(subject)?;
        debug!(
            "Fetching listing - subject={}, section={}, page_size={}",
            subject,
            subject.section(),
            self.page_size
        );

        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        let articles = Self::parse_listing(&body, self.limit)?;

        debug!("Retrieved {} articles for {}", articles.len(), subject);
        Ok(articles)
    }

    fn fetch_article(&self, listed: &ListedArticle) -> DashboardResult<ExtractedArticle> {
        Url::parse(&listed.url)
            .map_err(|e| DashboardError::InvalidUrl(format!("{}: {}", listed.url, e)))?;

        debug!("Fetching article - url={}", listed.url);
        let html = self
            .client
            .get(&listed.url)
            .send()?
            .error_for_status()?
            .text()?;

        let (title, content) = self.extractor.extract(&html)?;
        let title = title
            .or_else(|| Some(listed.title.clone()).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| "Untitled".to_string());

        Ok(ExtractedArticle::new(listed.url.clone(), title, content)
            .with_published(listed.published.clone()))
    }
}
