//! Source of page metadata.

use crate::domain::entities::MetadataOutcome;
use async_trait::async_trait;

/// Fetches a page and extracts title, description and keyword hints.
///
/// Implementations never fail outright: unreachable pages degrade to
/// URL-derived metadata and rejected pages are reported as
/// [`MetadataOutcome::Rejected`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch_metadata(&self, url: &str) -> MetadataOutcome;
}
