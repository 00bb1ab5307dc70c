#![allow(clippy::unwrap_used)]
// Coverage for the remaining catalog surfaces: monitors, access keys,
// apps, and collector upgrades.

use serde_json::{Map, Value, json};
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sumoly_api::models::JobStatus;
use sumoly_api::{Client, Credentials, Error};

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

// ── Monitors ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_monitor_under_parent() {
    let (server, client) = setup().await;

    let monitor = json!({
        "name": "High error rate",
        "type": "MonitorsLibraryMonitor",
        "monitorType": "Logs",
        "queries": [{ "rowId": "A", "query": "_sourceCategory=prod error" }],
        "triggers": [{ "triggerType": "Critical", "threshold": 100 }],
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/monitors"))
        .and(query_param("parentId", "0000000000000001"))
        .and(body_json(&monitor))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "M1" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_monitor("0000000000000001", &params(monitor.clone()))
        .await
        .unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_create_monitor_rejects_unknown_type() {
    let (server, client) = setup().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .create_monitor(
            "0000000000000001",
            &params(json!({ "name": "m", "type": "Dashboard" })),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_search_monitors_requires_query() {
    let (server, client) = setup().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .search_monitors(&params(json!({ "limit": 10 })))
        .await
        .unwrap_err();
    assert!(
        err.to_string().contains("missing required field `query`"),
        "got: {err}"
    );
}

// ── Access keys ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_access_keys_paginates_with_opaque_token() {
    let (server, client) = setup().await;

    // Mount the more specific matcher first: wiremock returns the first
    // matching mock in mount order, and the token-carrying request also
    // satisfies the generic `limit=2` matcher.
    Mock::given(method("GET"))
        .and(path("/api/v1/accessKeys"))
        .and(query_param("limit", "2"))
        .and(query_param("token", "opaque-token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "K3" }],
            "next": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accessKeys"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "K1" }, { "id": "K2" }],
            "next": "opaque-token-abc",
        })))
        .expect(1)
        .mount(&server)
        .await;

    // the client does not auto-paginate; the caller threads the token
    let first: Value = client
        .list_access_keys(Some(&params(json!({ "limit": 2 }))))
        .await
        .unwrap()
        .json()
        .unwrap();
    let token = first["next"].as_str().unwrap();

    let second: Value = client
        .list_access_keys(Some(&params(json!({ "limit": 2, "token": token }))))
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(second["data"][0]["id"], "K3");
}

#[tokio::test]
async fn test_update_access_key_requires_disabled_flag() {
    let (server, client) = setup().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .update_access_key("K1", &params(json!({ "corsHeaders": [] })))
        .await
        .unwrap_err();
    assert!(
        err.to_string().contains("missing required field `disabled`"),
        "got: {err}"
    );
}

// ── Apps ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_app_install_job_flow() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/apps/ceb7fac5-1127-4a04-a5b8-2e49190be3d4/install"))
        .and(body_json(json!({
            "name": "Nginx",
            "destinationFolderId": "F1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "A1" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps/install/A1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Failed",
            "error": { "code": "content:duplicate", "message": "already installed" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .start_app_install(
            "ceb7fac5-1127-4a04-a5b8-2e49190be3d4",
            &params(json!({ "name": "Nginx", "destinationFolderId": "F1" })),
        )
        .await
        .unwrap();

    let status: JobStatus = client
        .get_app_install_status("A1")
        .await
        .unwrap()
        .json()
        .unwrap();
    assert!(status.is_terminal());
    assert!(!status.succeeded());
    assert!(status.error.is_some());
}

// ── Collector upgrades ──────────────────────────────────────────────

#[tokio::test]
async fn test_upgrade_task_passes_body_through_unvalidated() {
    let (server, client) = setup().await;

    // no schema is defined for upgrade payloads; whatever the caller
    // builds goes to the server as-is
    let task = json!({ "collectorIds": [1, 2], "toVersion": "19.216-22" });

    Mock::given(method("POST"))
        .and(path("/api/v1/collectors/upgrades"))
        .and(body_json(&task))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "id": "42", "link": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.start_collector_upgrade(&task).await.unwrap();
    assert_eq!(resp.status().as_u16(), 202);
}
