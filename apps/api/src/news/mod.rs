//! Headline Fetcher — one-shot scrape of a public news feed for topical headlines.
//!
//! Never fails: any transport, status, or parse problem degrades to an empty list
//! so generation can proceed without news context.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

pub mod feed;

pub const GOOGLE_NEWS_RSS_URL: &str = "https://news.google.com/rss/search";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch news: {0}")]
    Http(#[from] reqwest::Error),

    #[error("News feed returned status {0}")]
    Status(u16),
}

/// Source of industry headlines.
/// Carried in `AppState` as `Arc<dyn HeadlineSource>`.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Returns at most `count` headlines for `industry`; empty on any failure.
    async fn fetch(&self, industry: &str, count: usize) -> Vec<String>;
}

/// Google News RSS search scraper.
#[derive(Clone)]
pub struct GoogleNewsSource {
    client: Client,
    feed_url: String,
}

impl GoogleNewsSource {
    pub fn new(feed_url: impl Into<String>) -> Result<Self, NewsError> {
        Ok(Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()?,
            feed_url: feed_url.into(),
        })
    }

    async fn try_fetch(&self, industry: &str, count: usize) -> Result<Vec<String>, NewsError> {
        let url = feed::search_url(&self.feed_url, industry)
            .ok_or_else(|| NewsError::InvalidUrl(self.feed_url.clone()))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(feed::parse_headlines(&body, count))
    }
}

#[async_trait]
impl HeadlineSource for GoogleNewsSource {
    async fn fetch(&self, industry: &str, count: usize) -> Vec<String> {
        match self.try_fetch(industry, count).await {
            Ok(headlines) => {
                debug!("Fetched {} headlines for '{}'", headlines.len(), industry);
                headlines
            }
            Err(e) => {
                warn!("Headline fetch for '{}' failed: {e}", industry);
                Vec::new()
            }
        }
    }
}
