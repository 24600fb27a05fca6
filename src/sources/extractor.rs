use scraper::{ElementRef, Html, Selector};

use crate::errors::{DashboardError, DashboardResult};

/// Pulls the headline and body paragraphs out of an article page
pub struct HtmlExtractor {
    og_title: Selector,
    heading: Selector,
    title: Selector,
    article_paragraphs: Selector,
    paragraphs: Selector,
}

impl HtmlExtractor {
    pub fn new() -> Self {
        Self {
            og_title: Selector::parse(r#"meta[property="og:title"]"#).unwrap(),
            heading: Selector::parse("h1").unwrap(),
            title: Selector::parse("title").unwrap(),
            article_paragraphs: Selector::parse("article p").unwrap(),
            paragraphs: Selector::parse("p").unwrap(),
        }
    }

    /// Returns `(title, content)`; the title is `None` when the page has none
    pub fn extract(&self, html: &str) -> DashboardResult<(Option<String>, String)> {
        let document = Html::parse_document(html);

        let title = self.extract_title(&document);

        let mut paragraphs = Self::paragraph_texts(document.select(&self.article_paragraphs));
        if paragraphs.is_empty() {
            paragraphs = Self::paragraph_texts(document.select(&self.paragraphs));
        }

        if paragraphs.is_empty() {
            return Err(DashboardError::Extraction(
                "No paragraph text found".to_string(),
            ));
        }

        Ok((title, paragraphs.join("\n\n")))
    }

    fn extract_title(&self, document: &Html) -> Option<String> {
        // Open Graph title is the cleanest headline on news pages
        if let Some(content) = document
            .select(&self.og_title)
            .next()
            .and_then(|e| e.value().attr("content"))
        {
            let content = collapse_whitespace(content);
            if !content.is_empty() {
                return Some(content);
            }
        }

        [&self.heading, &self.title]
            .into_iter()
            .filter_map(|selector| document.select(selector).next())
            .map(element_text)
            .find(|text| !text.is_empty())
    }

    fn paragraph_texts<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> Vec<String> {
        elements
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect()
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head>
            <title>Page title | The Guardian</title>
            <meta property="og:title" content="Harris rallies voters in  Michigan">
          </head>
          <body>
            <nav><p>Skip to main content</p></nav>
            <article>
              <h1>Harris rallies voters</h1>
              <p>Kamala Harris spoke to a   crowd of thousands.</p>
              <p>   </p>
              <p>The vice-president's <a href="/x">speech</a> focused on the economy.</p>
            </article>
          </body>
        </html>
    "#;

    #[test]
    fn test_extracts_og_title_and_article_paragraphs() {
        let (title, content) = HtmlExtractor::new().extract(PAGE).unwrap();

        assert_eq!(title.as_deref(), Some("Harris rallies voters in Michigan"));
        assert_eq!(
            content,
            "Kamala Harris spoke to a crowd of thousands.\n\nThe vice-president's speech focused on the economy."
        );
    }

    #[test]
    fn test_falls_back_to_heading_and_all_paragraphs() {
        let html = "<html><body><h1>Trump in Ohio</h1><div><p>First.</p><p>Second.</p></div></body></html>";
        let (title, content) = HtmlExtractor::new().extract(html).unwrap();

        assert_eq!(title.as_deref(), Some("Trump in Ohio"));
        assert_eq!(content, "First.\n\nSecond.");
    }

    #[test]
    fn test_page_without_text_is_an_error() {
        let html = "<html><head><title>Empty</title></head><body><div>menu</div></body></html>";
        let result = HtmlExtractor::new().extract(html);

        assert!(matches!(result, Err(DashboardError::Extraction(_))));
    }
}
