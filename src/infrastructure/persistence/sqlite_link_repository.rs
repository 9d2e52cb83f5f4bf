//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::error::{ShortenError, Stage};
use crate::domain::repositories::LinkRepository;

const CREATE_URLS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        keyword TEXT PRIMARY KEY,
        original_url TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// SQLite repository for keyword storage and lookup.
///
/// The primary key on `keyword` is what guarantees uniqueness. The existence
/// check in [`LinkRepository::store`] only short-circuits the common case.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn exists(&self, keyword: &str) -> Result<bool, ShortenError> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE keyword = ?)")
                .bind(keyword)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists != 0)
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn initialize(&self) -> Result<(), ShortenError> {
        sqlx::query(CREATE_URLS_TABLE)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn store(&self, keyword: &str, url: &str) -> Result<(), ShortenError> {
        if self.exists(keyword).await? {
            return Err(ShortenError::DuplicateKey(keyword.to_string()));
        }

        sqlx::query("INSERT INTO urls (keyword, original_url) VALUES (?, ?)")
            .bind(keyword)
            .bind(url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ShortenError::DuplicateKey(keyword.to_string())
                } else {
                    ShortenError::from(e)
                }
            })?;

        Ok(())
    }

    async fn lookup(&self, keyword: &str) -> Result<ShortLink, ShortenError> {
        let row: Option<(String, String, NaiveDateTime)> = sqlx::query_as(
            "SELECT keyword, original_url, created_at FROM urls WHERE keyword = ?",
        )
        .bind(keyword)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| ShortenError::storage(Stage::Resolving, e))?;

        row.map(|(keyword, url, created_at)| ShortLink::new(keyword, url, created_at.and_utc()))
            .ok_or_else(|| ShortenError::NotFound(keyword.to_string()))
    }

    async fn delete(&self, keyword: &str) -> Result<(), ShortenError> {
        let result = sqlx::query("DELETE FROM urls WHERE keyword = ?")
            .bind(keyword)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ShortenError::NotFound(keyword.to_string()));
        }

        Ok(())
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
