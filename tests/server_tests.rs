use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use libris::config::MutationMode;
use libris::error::LibrisError;
use libris::graphql::{bind, build_schema, router, run_server};
use libris::storage::LibraryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    router(build_schema(
        LibraryStore::catalogue(MutationMode::Ephemeral).unwrap(),
    ))
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_post_root() {
    let (status, body) = post_json("/", json!({ "query": "{ numberSix }" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "numberSix": 6 } }));
}

#[tokio::test]
async fn test_post_graphql_path() {
    let (status, body) = post_json(
        "/graphql",
        json!({
            "query": "query($id: ID!) { author(id: $id) { name } }",
            "variables": { "id": "1" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "author": { "name": "Kate Chopin" } } }));
}

#[tokio::test]
async fn test_validation_error_is_reported_in_body() {
    let (status, body) = post_json("/", json!({ "query": "{ nope }" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_get_root_serves_graphiql() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&bytes).to_lowercase();
    assert!(html.contains("graphiql"));
}

// =============================================================================
// Bound listener
// =============================================================================

#[tokio::test]
async fn test_run_server_answers_on_bound_address() {
    let listener = bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let schema = build_schema(LibraryStore::catalogue(MutationMode::Ephemeral).unwrap());
    let server = tokio::spawn(run_server(schema, listener));

    let body: Value = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .json(&json!({ "query": "{ numberSix }" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "data": { "numberSix": 6 } }));

    server.abort();
}

#[tokio::test]
async fn test_bind_reports_address_in_use() {
    let first = bind("127.0.0.1:0").await.unwrap();
    let addr = first.local_addr().unwrap().to_string();

    let err = bind(&addr).await.unwrap_err();
    assert!(matches!(err, LibrisError::Bind { addr: ref a, .. } if *a == addr));
}
