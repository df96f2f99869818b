//! HTTP retrieval of playlists and segments.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::config::GrabConfig;
use crate::error::GrabError;

/// Retrieves playlist text.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch_manifest(&self, url: &str) -> Result<String, GrabError>;
}

/// Retrieves one segment body.
#[async_trait]
pub trait SegmentFetcher: Send + Sync {
    async fn fetch_segment(&self, url: &str) -> Result<Bytes, GrabError>;
}

/// Reqwest-backed fetcher used for real runs. One shared client carries the
/// configured user agent and optional overall timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &GrabConfig) -> Result<Self, GrabError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    async fn get_ok(&self, url: &str) -> Result<reqwest::Response, GrabError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GrabError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ManifestSource for HttpFetcher {
    async fn fetch_manifest(&self, url: &str) -> Result<String, GrabError> {
        let text = self.get_ok(url).await?.text().await?;
        debug!(url = %url, bytes = text.len(), "fetched playlist");
        Ok(text)
    }
}

#[async_trait]
impl SegmentFetcher for HttpFetcher {
    async fn fetch_segment(&self, url: &str) -> Result<Bytes, GrabError> {
        let data = self.get_ok(url).await?.bytes().await?;
        debug!(url = %url, bytes = data.len(), "fetched segment");
        Ok(data)
    }
}
