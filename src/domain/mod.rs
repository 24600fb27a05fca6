pub mod article;
pub mod report;
pub mod sentiment;
pub mod subject;

pub use article::{Article, ExtractedArticle, ListedArticle};
pub use report::SubjectReport;
pub use sentiment::{PolarityClass, ScoreKind, SentimentScore, SubjectivityClass};
pub use subject::Subject;
