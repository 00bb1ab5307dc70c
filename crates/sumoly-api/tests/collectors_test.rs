#![allow(clippy::unwrap_used)]
// Collector catalog tests: schema validation gating, name-lookup rules,
// and the read-modify-write update flow.

use serde_json::{Map, Value, json};
use url::Url;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sumoly_api::models::CollectorUpdate;
use sumoly_api::{Client, Credentials, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let client = Client::with_endpoint(
        reqwest::Client::new(),
        Credentials::new("test-id", "test-key"),
        base,
    );
    (server, client)
}

fn params(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

fn assert_validation(err: &Error, needle: &str) {
    match err {
        Error::Validation { message } => assert!(
            message.contains(needle),
            "expected {needle:?} in message, got: {message}"
        ),
        other => panic!("expected Validation error, got: {other:?}"),
    }
}

/// Mount a catch-all mock that fails the test if anything reaches the wire.
async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

// ── Plain calls ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_collectors_with_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors"))
        .and(query_param("limit", "100"))
        .and(query_param("filter", "hosted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collectors": [{ "id": 1, "name": "c1", "collectorType": "Hosted" }]
        })))
        .mount(&server)
        .await;

    let resp = client
        .list_collectors(Some(&params(json!({ "limit": 100, "filter": "hosted" }))))
        .await
        .unwrap();

    assert!(resp.is_success());
    let body: Value = resp.json().unwrap();
    assert_eq!(body["collectors"][0]["name"], "c1");
}

#[tokio::test]
async fn test_offline_collectors_below_minimum_never_hits_network() {
    let (server, client) = setup().await;
    expect_no_requests(&server).await;

    let err = client
        .list_offline_collectors(Some(&params(json!({ "aliveBeforeDays": 0 }))))
        .await
        .unwrap_err();

    assert_validation(&err, "at least 1");
}

#[tokio::test]
async fn test_offline_collectors_rejects_unknown_param() {
    let (server, client) = setup().await;
    expect_no_requests(&server).await;

    let err = client
        .delete_offline_collectors(Some(&params(json!({ "aliveBefore": 10 }))))
        .await
        .unwrap_err();

    assert_validation(&err, "unknown field `aliveBefore`");
}

// ── Create + mutual exclusion ───────────────────────────────────────

#[tokio::test]
async fn test_create_hosted_collector_wraps_body() {
    let (server, client) = setup().await;

    let definition = json!({
        "collectorType": "Hosted",
        "name": "My Hosted Collector",
        "description": "An example hosted collector",
        "category": "HTTP Collection",
        "fields": { "_budget": "test_budget" }
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/collectors"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "collector": definition })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "collector": { "id": 5, "name": "My Hosted Collector" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_hosted_collector(&params(definition.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
}

#[tokio::test]
async fn test_create_collector_cutoff_fields_are_mutually_exclusive() {
    let (server, client) = setup().await;
    expect_no_requests(&server).await;

    let err = client
        .create_hosted_collector(&params(json!({
            "collectorType": "Hosted",
            "name": "c",
            "cutoffTimestamp": 1_600_000_000_000_i64,
            "cutoffRelativeTime": "-24h",
        })))
        .await
        .unwrap_err();

    assert_validation(&err, "may not be used together");
}

// ── Name lookups ────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_collector_by_name_rejects_illegal_characters() {
    let (server, client) = setup().await;
    expect_no_requests(&server).await;

    for name in ["a;b", "a/b", "a%b", "a\\b"] {
        let err = client.get_collector_by_name(name).await.unwrap_err();
        match err {
            Error::InvalidName { name: ref n } => assert_eq!(n, name),
            other => panic!("expected InvalidName for {name:?}, got: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_get_collector_by_name_with_period_appends_slash() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/name/web.example.log/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collector": { "id": 9, "name": "web.example.log" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.get_collector_by_name("web.example.log").await.unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_get_collector_by_name_encodes_segment() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/name/my%20collector"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collector": { "id": 3, "name": "my collector" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.get_collector_by_name("my collector").await.unwrap();
    assert!(resp.is_success());
}

// ── Read-modify-write update ────────────────────────────────────────

#[tokio::test]
async fn test_update_collector_is_get_then_conditional_put() {
    let (server, client) = setup().await;

    let fetched = json!({
        "collector": {
            "id": 42,
            "name": "old-name",
            "collectorType": "Installable",
            "category": "prod/web",
            "osName": "Linux",
        }
    });

    // the merged PUT body: the caller's name lands on top of the fetched
    // representation, everything else (including unmodeled osName) intact
    let merged = json!({
        "collector": {
            "id": 42,
            "name": "new-name",
            "collectorType": "Installable",
            "category": "prod/web",
            "osName": "Linux",
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"1a2b3c\"")
                .set_body_json(&fetched),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/collectors/42"))
        .and(header("If-Match", "\"1a2b3c\""))
        .and(body_json(&merged))
        .respond_with(ResponseTemplate::new(200).set_body_json(&merged))
        .expect(1)
        .mount(&server)
        .await;

    let update = CollectorUpdate {
        name: Some("new-name".into()),
        ..CollectorUpdate::default()
    };
    let resp = client.update_collector(42, &update).await.unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_update_collector_without_etag_fails_before_put() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collector": { "id": 42, "name": "old-name" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let update = CollectorUpdate {
        name: Some("new-name".into()),
        ..CollectorUpdate::default()
    };
    let err = client.update_collector(42, &update).await.unwrap_err();
    assert!(matches!(err, Error::MissingEtag { .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_concurrent_modification_status_passes_through() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"stale\"")
                .set_body_json(json!({ "collector": { "id": 42, "name": "n" } })),
        )
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(ResponseTemplate::new(412))
        .mount(&server)
        .await;

    let update = CollectorUpdate {
        category: Some("new/category".into()),
        ..CollectorUpdate::default()
    };
    // a 412 is data, not an error -- policy belongs to the caller
    let resp = client.update_collector(42, &update).await.unwrap();
    assert_eq!(resp.status().as_u16(), 412);
}
