use anyhow::{Context, Result};

use crate::llm_client::TOGETHER_API_URL;
use crate::news::GOOGLE_NEWS_RSS_URL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the API key for generation is supplied per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub news_feed_url: String,
    pub generation_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            news_feed_url: optional_url("NEWS_FEED_URL", GOOGLE_NEWS_RSS_URL)?,
            generation_api_url: optional_url("GENERATION_API_URL", TOGETHER_API_URL)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            news_feed_url: GOOGLE_NEWS_RSS_URL.to_string(),
            generation_api_url: TOGETHER_API_URL.to_string(),
        }
    }
}

fn optional_url(key: &str, default: &str) -> Result<String> {
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    url::Url::parse(&value).with_context(|| format!("{key} must be an absolute URL, got '{value}'"))?;
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_services() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(config.news_feed_url.starts_with("https://news.google.com/"));
        assert!(config.generation_api_url.starts_with("https://api.together.xyz/"));
    }

    #[test]
    fn test_optional_url_falls_back_to_default() {
        let value = optional_url("GHOSTWRITER_TEST_UNSET_URL", "https://example.com/feed/").unwrap();
        assert_eq!(value, "https://example.com/feed");
    }
}
