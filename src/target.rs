//! HTTP access to the load balancer under test
//!
//! All network I/O goes through the [`TargetProbe`] trait so the worker pool
//! and the status poller can be exercised against mocks. [`HttpTarget`] is
//! the real implementation, sharing one `reqwest::Client` (and therefore one
//! connection pool) across every worker and the poller.

use crate::error::{ProbeError, ProbeResult};
use crate::workload::WorkItem;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// One backend record from the target's `/stats` endpoint.
///
/// The pool under test reports more fields (uptime, memory usage); only the
/// ones rendered in the STATS line are deserialized, the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendStatus {
    /// Backend URL as the balancer knows it
    pub url: String,

    /// Whether the balancer currently considers the backend alive
    #[serde(default = "default_alive")]
    pub alive: bool,

    /// Active connections currently routed to this backend
    #[serde(default)]
    pub conn_count: u64,
}

fn default_alive() -> bool {
    true
}

impl BackendStatus {
    /// Host portion of the backend URL (everything after the scheme)
    pub fn host(&self) -> &str {
        self.url.split("//").last().unwrap_or(&self.url)
    }
}

/// Extract the backend identity from a response body.
///
/// The backends answer with text ending in their hostname
/// (`Hello from backend! I am running on host-a`); the identity is the last
/// whitespace-delimited token, or `"unknown"` for an empty body.
pub fn backend_identity(body: &str) -> &str {
    body.split_whitespace().last().unwrap_or("unknown")
}

/// Abstraction over the target service
///
/// Shared across workers and the poller via `Arc<dyn TargetProbe>`.
#[async_trait]
pub trait TargetProbe: Send + Sync {
    /// Issue one workload request and return the raw response body
    async fn fetch(&self, item: WorkItem) -> ProbeResult<String>;

    /// Fetch a fresh routing snapshot from `/stats`
    async fn fetch_stats(&self) -> ProbeResult<Vec<BackendStatus>>;
}

/// Real HTTP implementation of [`TargetProbe`]
///
/// The client is built without a request timeout: an unresponsive target
/// stalls the calling worker until the connection errors.
#[derive(Debug, Clone)]
pub struct HttpTarget {
    client: Client,
    base_url: String,
}

impl HttpTarget {
    /// Create a target probe for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TargetProbe for HttpTarget {
    async fn fetch(&self, item: WorkItem) -> ProbeResult<String> {
        let response = self.client.get(self.url_for(item.path())).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::UnexpectedStatus(status));
        }

        Ok(response.text().await?)
    }

    async fn fetch_stats(&self) -> ProbeResult<Vec<BackendStatus>> {
        let response = self.client.get(self.url_for("/stats")).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ProbeError::UnexpectedStatus(status));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_identity_last_token() {
        assert_eq!(
            backend_identity("Hello from backend! I am running on host-a"),
            "host-a"
        );
        assert_eq!(backend_identity("Slept 5 seconds on host-b\n"), "host-b");
    }

    #[test]
    fn test_backend_identity_empty_body() {
        assert_eq!(backend_identity(""), "unknown");
        assert_eq!(backend_identity("   \n"), "unknown");
    }

    #[test]
    fn test_url_for_paths() {
        let target = HttpTarget::new("http://localhost:3030");
        assert_eq!(target.url_for(WorkItem::Fast.path()), "http://localhost:3030/");
        assert_eq!(
            target.url_for(WorkItem::Slow.path()),
            "http://localhost:3030/sleep"
        );
        assert_eq!(target.url_for("/stats"), "http://localhost:3030/stats");
    }

    #[test]
    fn test_backend_status_deserialize() {
        let json = r#"[{"url":"http://10.0.0.1:8080","alive":true,"conn_count":3,"up_time":"2m"}]"#;
        let stats: Vec<BackendStatus> = serde_json::from_str(json).unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].url, "http://10.0.0.1:8080");
        assert!(stats[0].alive);
        assert_eq!(stats[0].conn_count, 3);
    }

    #[test]
    fn test_backend_status_missing_fields_default() {
        let json = r#"[{"url":"http://10.0.0.2:8080"}]"#;
        let stats: Vec<BackendStatus> = serde_json::from_str(json).unwrap();

        assert!(stats[0].alive);
        assert_eq!(stats[0].conn_count, 0);
    }

    #[test]
    fn test_backend_status_host() {
        let status = BackendStatus {
            url: "http://10.0.0.1:8080".to_string(),
            alive: true,
            conn_count: 3,
        };
        assert_eq!(status.host(), "10.0.0.1:8080");

        let bare = BackendStatus {
            url: "10.0.0.1:8080".to_string(),
            alive: true,
            conn_count: 0,
        };
        assert_eq!(bare.host(), "10.0.0.1:8080");
    }
}
