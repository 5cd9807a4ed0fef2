//! Delivery sinks
//!
//! A sink takes a finished record and carries it to its destination. The
//! feed loop only sees the trait, so tests drive the loop with scripted
//! sinks while production uses the HTTP implementation.

use anyhow::Result;
use async_trait::async_trait;
use gband_core::model::TelemetryRecord;
use std::time::Duration;
use thiserror::Error;

/// Bounded wait for the full ingest round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The one failure the feed loop recognizes: a record could not be
/// delivered. Covers connection failure, timeout, and an unreadable
/// response. Never fatal, never retried.
#[derive(Debug, Error)]
#[error("transmission to {url} failed: {source}")]
pub struct TransmissionError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// What a successful round trip yields; observed and logged, never acted on.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

/// Trait for record delivery destinations
#[async_trait]
pub trait Sink: Send + Sync {
    async fn send(&self, record: &TelemetryRecord) -> Result<Delivery>;
}

/// HTTP POST sink targeting the ingest API
pub struct HttpSink {
    url: String,
    client: reqwest::Client,
}

impl HttpSink {
    /// Build a sink for `{base}/api/v1/ingest`. The client is constructed
    /// once and reused across ticks.
    pub fn new(server_base_url: &str) -> Result<Self> {
        let url = format!("{}/api/v1/ingest", server_base_url.trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { url, client })
    }

    /// Endpoint this sink posts to
    pub fn url(&self) -> &str {
        &self.url
    }

    fn transmission_error(&self, source: reqwest::Error) -> TransmissionError {
        TransmissionError {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl Sink for HttpSink {
    async fn send(&self, record: &TelemetryRecord) -> Result<Delivery> {
        let response = self
            .client
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|e| self.transmission_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transmission_error(e))?;

        Ok(Delivery { status, body })
    }
}
