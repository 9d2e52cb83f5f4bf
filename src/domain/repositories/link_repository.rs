//! Repository trait for keyword mapping storage.

use crate::domain::entities::ShortLink;
use crate::domain::error::ShortenError;
use async_trait::async_trait;

/// Durable mapping from keyword to target URL.
///
/// Keywords are unique and immutable: there is no update-in-place, only
/// insert and delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates the schema if it does not exist yet.
    ///
    /// Idempotent; safe to call on every process start.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Storage`] on database errors.
    async fn initialize(&self) -> Result<(), ShortenError>;

    /// Stores a new keyword mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::DuplicateKey`] if the keyword is already
    /// present, whether detected by the existence check or by the primary key
    /// constraint on insert.
    ///
    /// Returns [`ShortenError::Storage`] on other database errors.
    async fn store(&self, keyword: &str, url: &str) -> Result<(), ShortenError>;

    /// Looks up the mapping for a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if no mapping exists.
    /// Returns [`ShortenError::Storage`] on database errors.
    async fn lookup(&self, keyword: &str) -> Result<ShortLink, ShortenError>;

    /// Deletes the mapping for a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if no row was affected.
    /// Returns [`ShortenError::Storage`] on database errors.
    async fn delete(&self, keyword: &str) -> Result<(), ShortenError>;
}
