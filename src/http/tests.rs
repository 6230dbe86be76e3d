//! Tests for the HTTP transport

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::MessageList;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> Transport {
    let config = ClientConfig::builder()
        .access_token("test-token")
        .base_url(server.uri())
        .build();
    Transport::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_enveloped_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/99/messages"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "count": 1,
                "messages": [{"id": "10", "text": "hi"}]
            },
            "meta": {"code": 200}
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let fetched: crate::types::Fetched<MessageList> = transport
        .get_enveloped(&["groups", "99", "messages"], &[])
        .await
        .unwrap();

    let page = fetched.into_data().unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.messages[0].id, "10");
}

#[tokio::test]
async fn test_get_enveloped_forwards_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/99/messages"))
        .and(query_param("limit", "100"))
        .and(query_param("before_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"count": 0, "messages": []},
            "meta": {"code": 200}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let query = [
        ("limit", "100".to_string()),
        ("before_id", "42".to_string()),
    ];
    let fetched: crate::types::Fetched<MessageList> = transport
        .get_enveloped(&["groups", "99", "messages"], &query)
        .await
        .unwrap();

    assert!(fetched.is_data());
}

#[tokio::test]
async fn test_get_enveloped_not_modified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/99/messages"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let fetched: crate::types::Fetched<MessageList> = transport
        .get_enveloped(&["groups", "99", "messages"], &[])
        .await
        .unwrap();

    assert!(fetched.is_not_modified());
}

#[tokio::test]
async fn test_get_enveloped_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/99/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": null,
            "meta": {"code": 401, "errors": ["unauthorized"]}
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport
        .get_enveloped::<MessageList>(&["groups", "99", "messages"], &[])
        .await
        .unwrap_err();

    match err {
        Error::Api { code, errors } => {
            assert_eq!(code, 401);
            assert_eq!(errors, vec!["unauthorized"]);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_enveloped_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/99/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport
        .get_enveloped::<MessageList>(&["groups", "99", "messages"], &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_get_enveloped_success_without_payload() {
    let server = MockServer::start().await;

    // meta says 200 but the response object is missing
    Mock::given(method("GET"))
        .and(path("/groups/99/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"code": 200}
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport
        .get_enveloped::<MessageList>(&["groups", "99", "messages"], &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_post_json_sends_token_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/groups/99/messages"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": {"id": "77", "text": "created"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let fetched: crate::types::Fetched<serde_json::Value> = transport
        .post_json(
            &["groups", "99", "messages"],
            &json!({"message": {"source_guid": "g", "text": "created"}}),
        )
        .await
        .unwrap();

    let body = fetched.into_data().unwrap();
    assert_eq!(body["message"]["id"], "77");
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/groups/99/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"count": 0, "messages": []},
            "meta": {"code": 200}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .access_token("test-token")
        .base_url(format!("{}/v3/", server.uri()))
        .build();
    let transport = Transport::new(&config).unwrap();

    let fetched: crate::types::Fetched<MessageList> = transport
        .get_enveloped(&["groups", "99", "messages"], &[])
        .await
        .unwrap();

    assert!(fetched.is_data());
}

#[test]
fn test_transport_rejects_invalid_base_url() {
    let config = ClientConfig::builder()
        .access_token("tok")
        .base_url("::not-a-url::")
        .build();
    assert!(Transport::new(&config).is_err());
}
