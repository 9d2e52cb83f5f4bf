mod common;

use axum::body::Bytes;
use axum_test::TestServer;
use common::{StubCompletionClient, StubMetadataSource};
use keyword_shortener::domain::entities::{MetadataOutcome, PageMetadata};
use keyword_shortener::domain::error::GenerationError;
use keyword_shortener::routes::router;
use serde_json::{Value, json};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let extractor = StubMetadataSource::with_title("Example Domain");
    let completion = StubCompletionClient::answering("sample");
    let state = common::create_test_state(pool.clone(), extractor.clone(), completion.clone());
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["keyword"], "sample");
    assert_eq!(body["url"], "https://example.com");

    assert_eq!(extractor.call_count(), 1);
    assert_eq!(completion.call_count(), 1);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_then_redirect(pool: SqlitePool) {
    let state = common::create_test_state(
        pool,
        StubMetadataSource::with_title("Example Domain"),
        StubCompletionClient::answering("Sample"),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/some/page?x=1" }))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["keyword"], "sample");

    let response = server.get("/sample").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(
        response.header("location"),
        "https://example.com/some/page?x=1"
    );
}

#[sqlx::test]
async fn test_shorten_degraded_metadata_still_succeeds(pool: SqlitePool) {
    let extractor = StubMetadataSource::new(MetadataOutcome::Degraded(PageMetadata::degraded(
        "https://unreachable.test",
    )));
    let state = common::create_test_state(
        pool.clone(),
        extractor,
        StubCompletionClient::answering("unreachable"),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://unreachable.test" }))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["keyword"], "unreachable");
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: SqlitePool) {
    let extractor = StubMetadataSource::with_title("unused");
    let completion = StubCompletionClient::answering("unused");
    let state = common::create_test_state(pool.clone(), extractor.clone(), completion.clone());
    let server = TestServer::new(router(state)).unwrap();

    for url in ["not-a-url", "ftp://example.com/file", "/relative/path", ""] {
        let response = server.post("/shorten").json(&json!({ "url": url })).await;

        assert_eq!(response.status_code(), 400, "{url:?}");
        assert_eq!(
            response.json::<Value>()["error"]["code"],
            "validation_error"
        );
    }

    assert_eq!(extractor.call_count(), 0);
    assert_eq!(completion.call_count(), 0);
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_malformed_body(pool: SqlitePool) {
    let extractor = StubMetadataSource::with_title("unused");
    let completion = StubCompletionClient::answering("unused");
    let state = common::create_test_state(pool, extractor.clone(), completion.clone());
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .bytes(Bytes::from_static(b"{not json"))
        .add_header("content-type", "application/json")
        .await;
    assert_eq!(response.status_code(), 400);

    let response = server.post("/shorten").json(&json!({ "link": "x" })).await;
    assert_eq!(response.status_code(), 400);

    let response = server.post("/shorten").json(&json!({ "url": 42 })).await;
    assert_eq!(response.status_code(), 400);

    assert_eq!(extractor.call_count(), 0);
    assert_eq!(completion.call_count(), 0);
}

#[sqlx::test]
async fn test_shorten_rejected_page(pool: SqlitePool) {
    let completion = StubCompletionClient::answering("unused");
    let state = common::create_test_state(
        pool.clone(),
        StubMetadataSource::new(MetadataOutcome::Rejected { status: 500 }),
        completion.clone(),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/broken" }))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["stage"],
        "extracting"
    );
    assert_eq!(completion.call_count(), 0);
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_generation_failure(pool: SqlitePool) {
    let state = common::create_test_state(
        pool.clone(),
        StubMetadataSource::with_title("Example Domain"),
        StubCompletionClient::failing(GenerationError::Upstream("invalid api key".into())),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["stage"], "generating");
    assert!(!body.to_string().contains("invalid api key"));
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_invalid_generated_keyword(pool: SqlitePool) {
    let state = common::create_test_state(
        pool.clone(),
        StubMetadataSource::with_title("Example Domain"),
        StubCompletionClient::answering("two words"),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_duplicate_keyword(pool: SqlitePool) {
    common::insert_link(&pool, "sample", "https://first.example").await;

    let completion = StubCompletionClient::answering("sample");
    let state = common::create_test_state(
        pool.clone(),
        StubMetadataSource::with_title("Example Domain"),
        completion.clone(),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://second.example" }))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["stage"],
        "storing"
    );
    assert_eq!(completion.call_count(), 1);

    let response = server.get("/sample").await;
    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://first.example");
}

#[sqlx::test]
async fn test_shorten_rejects_control_characters(pool: SqlitePool) {
    let extractor = StubMetadataSource::with_title("unused");
    let completion = StubCompletionClient::answering("sample");
    let state = common::create_test_state(pool.clone(), extractor.clone(), completion.clone());
    let server = TestServer::new(router(state)).unwrap();

    for url in ["https://example.com/a\nb", "https://example.com/\ttab"] {
        let response = server.post("/shorten").json(&json!({ "url": url })).await;

        assert_eq!(response.status_code(), 400, "{url:?}");
    }

    assert_eq!(extractor.call_count(), 0);
    assert_eq!(completion.call_count(), 0);
    assert_eq!(common::count_links(&pool).await, 0);
    assert_eq!(server.get("/sample").await.status_code(), 404);
}

#[sqlx::test]
async fn test_shorten_rejects_route_name_as_keyword(pool: SqlitePool) {
    let state = common::create_test_state(
        pool.clone(),
        StubMetadataSource::with_title("URL shortener"),
        StubCompletionClient::answering("shorten"),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["stage"],
        "generating"
    );
    assert_eq!(common::count_links(&pool).await, 0);
}
