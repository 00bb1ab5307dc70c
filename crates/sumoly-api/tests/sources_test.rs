#![allow(clippy::unwrap_used)]
// Source catalog tests: download-flag serialization, create validation,
// and the read-modify-write update flow on the nested resource path.

use serde_json::{Map, Value, json};
use url::Url;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sumoly_api::models::SourceUpdate;
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

#[tokio::test]
async fn test_list_sources_serializes_download_flag_lowercase() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/12/sources"))
        .and(query_param("download", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sources": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .list_sources(12, Some(&params(json!({ "download": true }))))
        .await
        .unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_create_source_requires_source_type() {
    let (server, client) = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .create_source(12, &params(json!({ "name": "no-type" })))
        .await
        .unwrap_err();

    match err {
        Error::Validation { ref message } => {
            assert!(message.contains("missing required field `sourceType`"), "got: {message}");
        }
        other => panic!("expected Validation error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_source_admits_type_specific_fields() {
    let (server, client) = setup().await;

    // pathExpression is not in the schema spine; sources are open-world
    let definition = json!({
        "sourceType": "LocalFile",
        "name": "app-log",
        "category": "prod/app",
        "pathExpression": "/var/log/app/*.log",
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/collectors/12/sources"))
        .and(body_json(json!({ "source": definition })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "source": { "id": 7, "name": "app-log" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_source(12, &params(definition.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
}

#[tokio::test]
async fn test_update_source_is_get_then_conditional_put() {
    let (server, client) = setup().await;

    let fetched = json!({
        "source": {
            "id": 101,
            "name": "syslog",
            "sourceType": "Syslog",
            "category": "prod/syslog",
            "protocol": "UDP",
        }
    });
    let merged = json!({
        "source": {
            "id": 101,
            "name": "syslog",
            "sourceType": "Syslog",
            "category": "prod/syslog/eu",
            "protocol": "UDP",
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/12/sources/101"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"s-9\"")
                .set_body_json(&fetched),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/collectors/12/sources/101"))
        .and(header("If-Match", "\"s-9\""))
        .and(body_json(&merged))
        .respond_with(ResponseTemplate::new(200).set_body_json(&merged))
        .expect(1)
        .mount(&server)
        .await;

    let update = SourceUpdate {
        category: Some("prod/syslog/eu".into()),
        ..SourceUpdate::default()
    };
    let resp = client.update_source(12, 101, &update).await.unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_delete_source() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/collectors/12/sources/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.delete_source(12, 101).await.unwrap();
    assert!(resp.is_success());
}
