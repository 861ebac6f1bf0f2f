//! Client SDK for the devotional generation service
//!
//! Everything that needs the service goes through the [`DevotionalApi`]
//! trait, so the terminal client and the one-shot commands can be exercised
//! against a mock in tests and against [`http_client::HttpDevotionalClient`]
//! in production. Failures are reported as [`devotional_types::DevotionalError`]
//! wrapped in `anyhow::Error`, which callers can downcast when they need to
//! tell a rejected request from a broken connection.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use devotional_types::{Devotional, GenerationRequest};

pub mod http_client;

pub use http_client::HttpDevotionalClient;

/// DevotionalApi trait for communicating with the devotional service
#[async_trait]
pub trait DevotionalApi: Send + Sync {
    /// Fetch the suggested topics, in the order the service lists them
    async fn topics(&self) -> Result<Vec<String>>;

    /// Generate a devotional for the given request
    async fn generate(&self, request: &GenerationRequest) -> Result<Devotional>;

    /// Check if the service is reachable
    async fn health_check(&self) -> Result<()>;
}

pub type DevotionalApiBox = Box<dyn DevotionalApi>;

/// Factory for creating DevotionalApi instances
pub struct DevotionalClientFactory;

impl DevotionalClientFactory {
    /// Create an HTTP client for a remote service, optionally bounding
    /// every request by `timeout`
    pub fn create_http_client(base_url: String, timeout: Option<Duration>) -> DevotionalApiBox {
        let client = HttpDevotionalClient::new(base_url);
        match timeout {
            Some(timeout) => Box::new(client.with_timeout(timeout)),
            None => Box::new(client),
        }
    }
}
