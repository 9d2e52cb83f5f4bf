#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use keyword_shortener::application::services::{KeywordGenerator, ShortenService};
use keyword_shortener::domain::clients::{CompletionClient, CompletionRequest, MetadataSource};
use keyword_shortener::domain::entities::{MetadataOutcome, PageMetadata};
use keyword_shortener::domain::error::GenerationError;
use keyword_shortener::infrastructure::persistence::SqliteLinkRepository;
use keyword_shortener::state::AppState;

/// Metadata source returning a fixed outcome and counting calls.
pub struct StubMetadataSource {
    outcome: MetadataOutcome,
    pub calls: AtomicUsize,
}

impl StubMetadataSource {
    pub fn new(outcome: MetadataOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_title(title: &str) -> Arc<Self> {
        Self::new(MetadataOutcome::Full(PageMetadata {
            title: title.to_string(),
            source_url: "https://example.com".to_string(),
            ..PageMetadata::default()
        }))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataSource for StubMetadataSource {
    async fn fetch_metadata(&self, url: &str) -> MetadataOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MetadataOutcome::Full(metadata) => MetadataOutcome::Full(PageMetadata {
                source_url: url.to_string(),
                ..metadata.clone()
            }),
            other => other.clone(),
        }
    }
}

/// Completion client answering with a fixed keyword and counting calls.
pub struct StubCompletionClient {
    answer: Result<Vec<String>, GenerationError>,
    pub calls: AtomicUsize,
}

impl StubCompletionClient {
    pub fn answering(keyword: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(vec![keyword.to_string()]),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: GenerationError) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<Vec<String>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

pub fn create_test_state(
    pool: SqlitePool,
    extractor: Arc<StubMetadataSource>,
    completion: Arc<StubCompletionClient>,
) -> AppState {
    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let generator = KeywordGenerator::new(completion, Duration::from_secs(5));
    let service = ShortenService::new(extractor, generator, link_repository);

    AppState::new(Arc::new(service))
}

pub async fn insert_link(pool: &SqlitePool, keyword: &str, url: &str) {
    sqlx::query("INSERT INTO urls (keyword, original_url) VALUES (?, ?)")
        .bind(keyword)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
