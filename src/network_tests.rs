//! Tests for the JSON request helper

use super::*;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Receipt {
    id: u32,
}

#[tokio::test]
async fn test_post_serializes_payload_and_decodes_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new();
    let url = format!("{}/contact", server.uri());
    let receipt: Receipt = request(&client, Method::POST, &url, Some(&json!({"name": "Ada"})))
        .await
        .unwrap();

    assert_eq!(receipt, Receipt { id: 7 });
}

#[tokio::test]
async fn test_get_without_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;

    let receipt: Receipt = get(&Client::new(), &format!("{}/status", server.uri()))
        .await
        .unwrap();

    assert_eq!(receipt.id, 1);
}

#[tokio::test]
async fn test_client_error_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "bad"})))
        .mount(&server)
        .await;

    let result: Result<Receipt, _> =
        request(&Client::new(), Method::POST, &server.uri(), Some(&json!({}))).await;

    assert_eq!(result, Err(RequestError::RequestFailed));
}

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result: Result<Receipt, _> = get(&Client::new(), &server.uri()).await;

    assert_eq!(result, Err(RequestError::RequestFailed));
}

#[tokio::test]
async fn test_undecodable_body_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let result: Result<Receipt, _> = get(&Client::new(), &server.uri()).await;

    assert_eq!(result, Err(RequestError::RequestFailed));
}

#[tokio::test]
async fn test_stopped_server_is_request_failed() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    // Either refused or an unmocked 404, both collapse to the same error
    let result: Result<Receipt, _> = get(&Client::new(), &uri).await;

    assert_eq!(result, Err(RequestError::RequestFailed));
}

#[test]
fn test_error_message() {
    assert_eq!(RequestError::RequestFailed.to_string(), "request failed");
}
