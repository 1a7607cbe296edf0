use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::server::FeedError;

/// Where the raw ICS text comes from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<String, FeedError>;
}

/// Fetches the feed over HTTP(S).
pub struct HttpFeed {
    client: reqwest::Client,
    url: Url,
}

impl HttpFeed {
    pub fn new(url: Url) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpFeed { client, url })
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Upstream(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "fetched upstream feed");
        Ok(body)
    }
}
