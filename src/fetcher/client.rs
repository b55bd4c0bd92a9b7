use std::sync::Arc;

use crate::app::Result;
use crate::domain::Entry;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

/// Fetches and parses the whole feed, one request per call.
pub struct FeedClient {
    url: String,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        url::Url::parse(&url)?;
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new()?);
        Ok(Self::with_fetcher(url, fetcher))
    }

    pub fn with_fetcher(url: impl Into<String>, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            url: url.into(),
            fetcher,
            normalizer: Normalizer::new(),
        }
    }

    pub async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        let body = self.fetcher.fetch(&self.url).await?;
        let entries = self.normalizer.normalize(&body)?;
        tracing::info!("Fetched {} entries from {}", entries.len(), self.url);
        Ok(entries)
    }
}
