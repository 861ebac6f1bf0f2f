//! Integration tests for the HTTP devotional client
//!
//! These tests run the client against a mock HTTP server and check both the
//! request it sends and how it classifies the responses it gets back.

use std::time::Duration;

use devotional_client::{DevotionalApi, DevotionalClientFactory, HttpDevotionalClient};
use devotional_types::{AgeGroup, DevotionalError, GenerationRequest};
use mockito::Matcher;
use serde_json::json;

fn devotional_body() -> serde_json::Value {
    json!({
        "title": "T",
        "question_of_day": "Q",
        "listen_content": "L1",
        "learn_content": "L2",
        "live_content": "L3",
        "prayer": "P",
        "age_group": "teens",
        "topic": null
    })
}

#[tokio::test]
async fn test_topics_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/topics")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"topics": ["Family", "Friendship", "Service to Others"]}"#)
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    let topics = client.topics().await.unwrap();

    assert_eq!(topics, vec!["Family", "Friendship", "Service to Others"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_topics_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/topics")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    let err = client.topics().await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DevotionalError>(),
        Some(DevotionalError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_generate_sends_null_topic() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-devotional")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"age_group": "teens", "topic": null})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(devotional_body().to_string())
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    let request = GenerationRequest::new(AgeGroup::Teens, Some(""));
    let devotional = client.generate(&request).await.unwrap();

    assert_eq!(devotional.title, "T");
    assert_eq!(devotional.question_of_day, "Q");
    assert_eq!(devotional.age_group, "teens");
    assert_eq!(devotional.topic, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_sends_topic() {
    let mut server = mockito::Server::new_async().await;
    let mut body = devotional_body();
    body["topic"] = json!("Courage");
    let mock = server
        .mock("POST", "/generate-devotional")
        .match_body(Matcher::Json(
            json!({"age_group": "young_adults", "topic": "Courage"}),
        ))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    let request = GenerationRequest::new(AgeGroup::YoungAdults, Some("Courage"));
    let devotional = client.generate(&request).await.unwrap();

    assert_eq!(devotional.topic.as_deref(), Some("Courage"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_non_success_status_carries_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate-devotional")
        .with_status(500)
        .with_body(r#"{"detail": "Failed to generate devotional"}"#)
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    let request = GenerationRequest::new(AgeGroup::Adults, None);
    let err = client.generate(&request).await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<DevotionalError>(),
        Some(&DevotionalError::request(500, "Failed to generate devotional"))
    );
}

#[tokio::test]
async fn test_transport_error_when_unreachable() {
    // Nothing listens on port 9 on a test machine.
    let client = HttpDevotionalClient::new("http://127.0.0.1:9");
    let err = client.topics().await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DevotionalError>(),
        Some(DevotionalError::Transport { .. })
    ));
}

#[tokio::test]
async fn test_health_check() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status": "healthy"}"#)
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    assert!(client.health_check().await.is_ok());

    let mut down = mockito::Server::new_async().await;
    down.mock("GET", "/health")
        .with_status(503)
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(down.url());
    assert!(client.health_check().await.is_err());
}

#[tokio::test]
async fn test_generate_sends_topic_as_typed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-devotional")
        .match_body(Matcher::Json(json!({"age_group": "teens", "topic": " Courage "})))
        .with_status(200)
        .with_body(devotional_body().to_string())
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    let request = GenerationRequest::new(AgeGroup::Teens, Some(" Courage "));
    client.generate(&request).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate-devotional")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title": 1}"#)
        .create_async()
        .await;

    let client = HttpDevotionalClient::new(server.url());
    let request = GenerationRequest::new(AgeGroup::Teens, None);
    let err = client.generate(&request).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DevotionalError>(),
        Some(DevotionalError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_factory_client_talks_to_service() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/topics")
        .with_status(200)
        .with_body(r#"{"topics": ["Family"]}"#)
        .create_async()
        .await;

    let client =
        DevotionalClientFactory::create_http_client(server.url(), Some(Duration::from_secs(5)));
    assert_eq!(client.topics().await.unwrap(), vec!["Family"]);
    mock.assert_async().await;
}
