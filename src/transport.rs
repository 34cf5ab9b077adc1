//! ==============================================================================
//! transport.rs - http delivery of readings
//! ==============================================================================
//!
//! purpose:
//!     posts a reading as json and hands back the raw status and body.
//!     the push loop only talks to the `Transport` trait, so tests can swap
//!     in a scripted transport (same idea as the mock HAL on dev machines).
//!
//! relationships:
//!     - used by: pusher.rs (one post_json call per reading)
//!     - uses: reqwest (HttpTransport)
//!
//! ==============================================================================

use anyhow::{Context, Result};

use crate::reading::Reading;

/// what came back from the ingestion endpoint, uninterpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestResponse {
    pub status: u16,
    pub body: String,
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// post `reading` as a json body to `url`
    ///
    /// an error means the call itself did not complete. any http status,
    /// including 4xx/5xx, is a completed call.
    async fn post_json(&self, url: &str, reading: &Reading) -> Result<IngestResponse>;
}

/// reqwest-backed transport
///
/// no request timeout is set: a server that never answers blocks the run.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build http client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, reading: &Reading) -> Result<IngestResponse> {
        let response = self
            .client
            .post(url)
            .json(reading)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        Ok(IngestResponse { status, body })
    }
}
