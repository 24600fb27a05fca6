use thiserror::Error;

use crate::domain::ScoreKind;

#[derive(Error, Debug)]
pub enum DashboardError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Source errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected API response: {0}")]
    ApiResponse(String),

    #[error("Article extraction failed: {0}")]
    Extraction(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid input: {kind} score {value} is outside {}", .kind.domain_label())]
    InvalidScore { kind: ScoreKind, value: f64 },
}

pub type DashboardResult<T> = Result<T, DashboardError>;
