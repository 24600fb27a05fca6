use crate::errors::{DashboardError, DashboardResult};

pub const DEFAULT_API_URL: &str = "https://content.guardianapis.com";
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const DEFAULT_ARTICLE_LIMIT: usize = 20;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub guardian_api_key: String,
    pub guardian_api_url: String,
    pub page_size: usize,
    pub article_limit: usize,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> DashboardResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|key| !key.trim().is_empty());
        let guardian_api_key = non_blank("GUARDIAN_API_KEY")
            .or_else(|| non_blank("API_KEY"))
            .ok_or_else(|| DashboardError::MissingEnvVar("GUARDIAN_API_KEY".to_string()))?;

        let guardian_api_url =
            lookup("GUARDIAN_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let page_size = parse_positive(&lookup, "GUARDIAN_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let article_limit = parse_positive(&lookup, "ARTICLE_LIMIT", DEFAULT_ARTICLE_LIMIT)?;
        let http_timeout_secs =
            parse_positive(&lookup, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS as usize)? as u64;

        Ok(Self {
            guardian_api_key,
            guardian_api_url,
            page_size,
            article_limit,
            http_timeout_secs,
        })
    }
}

fn parse_positive<F>(lookup: &F, name: &str, default: usize) -> DashboardResult<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(DashboardError::Config(format!(
                "{} must be a positive integer, got '{}'",
                name, raw
            ))),
        },
    }
}
