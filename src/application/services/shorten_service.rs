//! Shortening pipeline: validate, extract, generate, store.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::services::KeywordGenerator;
use crate::domain::clients::MetadataSource;
use crate::domain::error::ShortenError;
use crate::domain::repositories::LinkRepository;
use crate::utils::url_validator::validate_url;

/// Orchestrates the three pipeline stages for a single URL.
///
/// Holds no per-request state. Nothing is written before the storing stage,
/// so a failure at any earlier stage leaves the store untouched.
pub struct ShortenService {
    extractor: Arc<dyn MetadataSource>,
    generator: KeywordGenerator,
    link_repository: Arc<dyn LinkRepository>,
}

impl ShortenService {
    /// Creates a new shortening service.
    pub fn new(
        extractor: Arc<dyn MetadataSource>,
        generator: KeywordGenerator,
        link_repository: Arc<dyn LinkRepository>,
    ) -> Self {
        Self {
            extractor,
            generator,
            link_repository,
        }
    }

    /// Shortens `url` and returns the stored keyword.
    ///
    /// The URL is stored exactly as given.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidInput`] if `url` is not an absolute http(s) URL;
    ///   no outbound call is made in that case
    /// - [`ShortenError::Fetch`] if the page answered with a non-2xx status
    /// - [`ShortenError::Generation`] if no usable keyword was produced
    /// - [`ShortenError::DuplicateKey`] if the keyword is already taken
    /// - [`ShortenError::Storage`] on database errors
    #[instrument(level = "info", skip(self))]
    pub async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        validate_url(url).map_err(|e| ShortenError::InvalidInput(e.to_string()))?;

        let outcome = self.extractor.fetch_metadata(url).await;
        debug!(outcome = outcome.label(), "Metadata extracted");
        let metadata = outcome
            .into_metadata()
            .map_err(|status| ShortenError::Fetch { status })?;

        let keyword = self.generator.generate(&metadata).await?;

        self.link_repository.store(&keyword, url).await?;

        info!(keyword = %keyword, "URL shortened");
        Ok(keyword)
    }

    /// Resolves a keyword to its stored target URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] for unknown keywords.
    pub async fn resolve(&self, keyword: &str) -> Result<String, ShortenError> {
        self.link_repository
            .lookup(keyword)
            .await
            .map(|link| link.target_url)
    }
}
