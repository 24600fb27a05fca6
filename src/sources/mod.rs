pub mod extractor;
pub mod guardian;
pub mod traits;

pub use extractor::HtmlExtractor;
pub use guardian::GuardianSource;
pub use traits::ArticleSource;
