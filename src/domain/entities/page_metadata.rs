//! Page metadata extracted from a target URL.

/// Text signals describing a page, used as keyword generation input.
///
/// Request-scoped only; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub source_url: String,
}

impl PageMetadata {
    /// Fallback metadata for a page that could not be fetched.
    ///
    /// The URL itself becomes the title so the generator still has a signal.
    pub fn degraded(source_url: &str) -> Self {
        Self {
            title: source_url.to_string(),
            description: String::new(),
            keywords: String::new(),
            source_url: source_url.to_string(),
        }
    }
}

/// Result of a single extraction attempt.
///
/// Network-level failures produce [`MetadataOutcome::Degraded`] so the
/// pipeline can continue, while a reachable page answering with a non-2xx
/// status produces [`MetadataOutcome::Rejected`], which callers treat as a
/// hard failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOutcome {
    /// Page fetched and parsed.
    Full(PageMetadata),
    /// Page unreachable; metadata derived from the URL only.
    Degraded(PageMetadata),
    /// Page reachable but answered with a non-success status.
    Rejected { status: u16 },
}

impl MetadataOutcome {
    /// Returns the metadata for usable outcomes, or the rejection status.
    pub fn into_metadata(self) -> Result<PageMetadata, u16> {
        match self {
            Self::Full(metadata) | Self::Degraded(metadata) => Ok(metadata),
            Self::Rejected { status } => Err(status),
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full(_) => "full",
            Self::Degraded(_) => "degraded",
            Self::Rejected { .. } => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_uses_url_as_title() {
        let metadata = PageMetadata::degraded("https://example.com/page");

        assert_eq!(metadata.title, "https://example.com/page");
        assert_eq!(metadata.source_url, "https://example.com/page");
        assert!(metadata.description.is_empty());
        assert!(metadata.keywords.is_empty());
    }

    #[test]
    fn test_rejected_outcome_yields_status() {
        let outcome = MetadataOutcome::Rejected { status: 503 };
        assert_eq!(outcome.label(), "rejected");
        assert_eq!(outcome.into_metadata(), Err(503));
    }

    #[test]
    fn test_degraded_outcome_yields_metadata() {
        let outcome = MetadataOutcome::Degraded(PageMetadata::degraded("https://a.test"));
        let metadata = outcome.into_metadata().unwrap();
        assert_eq!(metadata.title, "https://a.test");
    }
}
