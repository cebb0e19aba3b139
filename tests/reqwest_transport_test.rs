//! Integration tests for the production transport against a local mock
//! server: what actually goes on the wire, and how real responses come back
//! through the pipeline.

use pagerduty_client::{Client, Config, PagerDutyError, QueryParams};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(Config::new("sk-test").with_base_url(server.uri())).expect("client builds")
}

#[tokio::test]
async fn get_sends_default_headers_and_normalized_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/incidents"))
        .and(header("Accept", "application/vnd.pagerduty+json;version=2"))
        .and(header("Authorization", "Token token=sk-test"))
        .and(header("Content-Type", "application/json"))
        .and(query_param("statuses[]", "triggered,acknowledged"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"incidents": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut params = QueryParams::new();
    params.insert("statuses", vec!["triggered", "acknowledged"]);
    params.insert("limit", 25_i64);

    let outcome = client.get("incidents", params).await.unwrap();
    assert_eq!(outcome, Some(json!({"incidents": []})));
}

#[tokio::test]
async fn post_sends_serialized_json_body() {
    let server = MockServer::start().await;
    let payload = json!({"incident": {"type": "incident", "title": "db down"}});
    Mock::given(method("POST"))
        .and(path("/incidents"))
        .and(body_json(payload.clone()))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"incident": {"id": "PABC123"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.post("incidents", payload).await.unwrap();
    assert_eq!(created, Some(json!({"incident": {"id": "PABC123"}})));
}

#[tokio::test]
async fn delete_with_empty_body_yields_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/incidents/PABC123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.delete("incidents/PABC123").await.unwrap();
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn real_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/incidents/NOPE"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": {"message": "Not Found"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get("incidents/NOPE", QueryParams::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn real_400_maps_to_bad_request_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/incidents"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"error\":\"bad\"}"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.post("incidents", json!({})).await.unwrap_err();
    match err {
        PagerDutyError::BadRequest { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "{\"error\":\"bad\"}");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

// Redirects are transport-default: reqwest resolves them before the
// classifier ever sees a 3xx.
#[tokio::test]
async fn redirects_are_followed_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", "/new"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"moved": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.get("old", QueryParams::new()).await.unwrap();
    assert_eq!(outcome, Some(json!({"moved": true})));
}
