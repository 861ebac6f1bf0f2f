use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use devotional_types::{Devotional, DevotionalError, GenerationRequest, TopicsResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::DevotionalApi;

const MAX_DETAIL_LEN: usize = 200;

/// HTTP client for communicating with a remote devotional service
pub struct HttpDevotionalClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpDevotionalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Bound every request. Without this a request waits for as long as the
    /// service takes.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_request_timeout(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = self
            .with_request_timeout(builder)
            .send()
            .await
            .map_err(|e| DevotionalError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body);
            tracing::debug!(status = status.as_u16(), detail = %detail, "devotional service rejected request");
            return Err(DevotionalError::request(status.as_u16(), detail).into());
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response
            .text()
            .await
            .map_err(|e| DevotionalError::transport(e.to_string()))?;

        let parsed = serde_json::from_str::<T>(&body)
            .map_err(|e| DevotionalError::decode(e.to_string()))?;

        Ok(parsed)
    }
}

/// Pull a readable reason out of an error body. The service answers errors
/// with `{"detail": ...}`; anything else is passed through, shortened.
fn extract_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no detail".to_string();
    }

    trimmed.chars().take(MAX_DETAIL_LEN).collect()
}

#[async_trait]
impl DevotionalApi for HttpDevotionalClient {
    async fn topics(&self) -> Result<Vec<String>> {
        let url = self.endpoint("topics");
        tracing::debug!(url = %url, "fetching topic suggestions");

        let response = self.send(self.client.get(&url)).await?;
        let body: TopicsResponse = Self::decode(response).await?;

        Ok(body.topics)
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Devotional> {
        let url = self.endpoint("generate-devotional");
        tracing::debug!(
            url = %url,
            age_group = %request.age_group,
            topic = ?request.topic,
            "requesting devotional"
        );

        let builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request);

        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    async fn health_check(&self) -> Result<()> {
        let url = self.endpoint("health");
        self.send(self.client.get(&url)).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpDevotionalClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("topics"), "http://localhost:8000/topics");
    }

    #[test]
    fn test_extract_detail_from_service_error() {
        assert_eq!(
            extract_detail(r#"{"detail": "Failed to generate devotional"}"#),
            "Failed to generate devotional"
        );
        assert_eq!(extract_detail(r#"{"detail": [1, 2]}"#), "[1,2]");
        assert_eq!(extract_detail("Bad Gateway"), "Bad Gateway");
        assert_eq!(extract_detail("  "), "no detail");
    }

    #[test]
    fn test_extract_detail_truncates_long_bodies() {
        let body = "x".repeat(MAX_DETAIL_LEN * 2);
        assert_eq!(extract_detail(&body).len(), MAX_DETAIL_LEN);
    }
}
