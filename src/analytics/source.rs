//! Analytics Endpoint Client
//!
//! The snapshot comes from a single HTTP GET against a fixed URL.
//! One request per page visit: no retry, no cache.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use super::snapshot::AnalyticsSnapshot;

/// Where analytics snapshots come from
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Fetch the current snapshot
    async fn fetch_snapshot(&self) -> Result<AnalyticsSnapshot, AnalyticsError>;
}

/// Snapshot source backed by the analytics function endpoint
pub struct HttpAnalyticsSource {
    client: Client,
    endpoint_url: String,
}

impl HttpAnalyticsSource {
    /// Create a client for `endpoint_url`.
    ///
    /// `timeout` is off unless an operator configures one.
    pub fn new(
        endpoint_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, AnalyticsError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(AnalyticsError::Request)?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl AnalyticsSource for HttpAnalyticsSource {
    async fn fetch_snapshot(&self) -> Result<AnalyticsSnapshot, AnalyticsError> {
        let response = self
            .client
            .get(&self.endpoint_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyticsError::Timeout
                } else if e.is_connect() {
                    AnalyticsError::Unavailable
                } else {
                    AnalyticsError::Request(e)
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(AnalyticsError::Request)?;

        if !status.is_success() {
            return Err(AnalyticsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        AnalyticsSnapshot::from_json(&body).map_err(AnalyticsError::Decode)
    }
}

/// Analytics fetch errors
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Analytics endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid analytics payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Analytics request timed out")]
    Timeout,

    #[error("Analytics endpoint unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    const PAYLOAD: &str = r#"{
        "timeline": [{"date": "2024-05-01", "completed": 4, "cancelled": 1, "active": 2}],
        "masters": [{"name": "Михаил Сидоров", "total_bookings": 12, "completed": 9}],
        "timeDistribution": [{"hour": 10, "count": 3}],
        "totals": {"total": 100, "completed": 60, "cancelled": 15, "active": 25}
    }"#;

    /// Serve `app` on an ephemeral local port and return a source pointed at it
    async fn spawn_endpoint(app: Router) -> HttpAnalyticsSource {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        HttpAnalyticsSource::new(
            format!("http://{addr}/analytics"),
            Some(Duration::from_secs(5)),
        )
        .unwrap()
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let source = HttpAnalyticsSource::new("http://127.0.0.1:9/analytics", None).unwrap();
        assert_eq!(source.endpoint_url(), "http://127.0.0.1:9/analytics");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails() {
        // Port 9 (discard) is closed on test machines
        let source = HttpAnalyticsSource::new(
            "http://127.0.0.1:9/analytics",
            Some(Duration::from_secs(2)),
        )
        .unwrap();

        let result = source.fetch_snapshot().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_valid_payload_is_decoded() {
        let app = Router::new().route("/analytics", get(|| async { PAYLOAD }));
        let source = spawn_endpoint(app).await;

        let snapshot = source.fetch_snapshot().await.unwrap();

        assert_eq!(snapshot.totals.completed, 60);
        assert_eq!(snapshot.stylist_load[0].name, "Михаил Сидоров");
        assert_eq!(snapshot.hourly_distribution[0].hour, 10);
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let app = Router::new().route(
            "/analytics",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database is down") }),
        );
        let source = spawn_endpoint(app).await;

        let err = source.fetch_snapshot().await.unwrap_err();

        match err {
            AnalyticsError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "database is down");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_html_body_maps_to_decode() {
        let app = Router::new().route(
            "/analytics",
            get(|| async { "<html><body>Bad gateway</body></html>" }),
        );
        let source = spawn_endpoint(app).await;

        let err = source.fetch_snapshot().await.unwrap_err();

        assert!(matches!(err, AnalyticsError::Decode(_)), "{err:?}");
    }
}
