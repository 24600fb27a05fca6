use crate::domain::{ExtractedArticle, ListedArticle, Subject};
use crate::errors::DashboardResult;

#[cfg_attr(test, mockall::automock)]
pub trait ArticleSource: Send + Sync {
    /// List the most recent articles covering a subject
    fn list_article_urls(&self, subject: Subject) -> DashboardResult<Vec<ListedArticle>>;

    /// Download a listed article and extract its title and text
    fn fetch_article(&self, listed: &ListedArticle) -> DashboardResult<ExtractedArticle>;
}
