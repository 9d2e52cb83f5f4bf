//! HTTP-backed metadata source.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::html::parse_metadata;
use crate::domain::clients::MetadataSource;
use crate::domain::entities::{MetadataOutcome, PageMetadata};

/// Default crawler user agent; many sites block unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

/// Default timeout for the whole page request, body included.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches pages over HTTP and extracts their metadata.
#[derive(Clone)]
pub struct HttpMetadataExtractor {
    client: Client,
}

impl HttpMetadataExtractor {
    /// Builds an extractor with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .pool_max_idle_per_host(10)
            .build()?;
        debug!(?timeout, user_agent, "Metadata extractor initialized");

        Ok(Self { client })
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataExtractor {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_metadata(&self, url: &str) -> MetadataOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, url = %url, "Metadata fetch failed, using URL as title");
                return MetadataOutcome::Degraded(PageMetadata::degraded(url));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %url, "Page rejected metadata fetch");
            return MetadataOutcome::Rejected {
                status: status.as_u16(),
            };
        }

        match response.text().await {
            Ok(body) => {
                debug!(url = %url, content_length = body.len(), "Fetched page");
                MetadataOutcome::Full(parse_metadata(&body, url))
            }
            Err(e) => {
                warn!(error = %e, url = %url, "Failed to read page body, using URL as title");
                MetadataOutcome::Degraded(PageMetadata::degraded(url))
            }
        }
    }
}
