//! Short link entity representing a keyword to URL mapping.

use chrono::{DateTime, Utc};

/// A persisted keyword mapping.
///
/// The keyword is the primary identifier: it is unique across the store and
/// immutable once written. The only way to reuse a keyword is to delete the
/// mapping first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub keyword: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(keyword: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            keyword,
            target_url,
            created_at,
        }
    }
}
