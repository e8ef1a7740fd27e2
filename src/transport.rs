//! Transport seam for the generate endpoint exchange.
//!
//! The client talks to the service through the [`Transport`] trait so
//! tests can substitute a stub without a live server. [`HttpTransport`]
//! is the production implementation.

use anyhow::{Context, Result};

/// A single request to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Full request URL, including the key and count query parameters
    pub url: String,
    /// JSON array of field descriptors
    pub body: String,
}

/// The raw outcome of one exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, read in full
    pub body: String,
}

impl ApiResponse {
    /// Whether the service accepted the request. The API signals
    /// failure with any status other than 200.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// A single blocking round trip to the generation endpoint.
///
/// Implementations must not retry, paginate, or otherwise reshape the
/// exchange; classification of the response belongs to the client.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Perform the exchange and return the raw response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Production transport backed by reqwest.
///
/// Each call builds its own `reqwest::Client`, so nothing is pooled or
/// shared across calls.
pub struct HttpTransport;

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let client = reqwest::Client::new();

        let response = client
            .post(&request.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request.body)
            .send()
            .await
            .context("failed to reach the generation endpoint")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("failed to read the generation response body")?;

        tracing::debug!("generation endpoint answered {status} with {} bytes", body.len());

        Ok(ApiResponse { status, body })
    }
}
