use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use smartbus_core::allocator::SeatAllocator;
use std::error::Error;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("allocator unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("allocator answered {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for the allocation service's `/allocate` endpoint. No retries.
#[derive(Debug, Clone)]
pub struct HttpSeatAllocator {
    client: reqwest::Client,
    allocate_url: String,
}

impl HttpSeatAllocator {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            allocate_url: format!("{}/allocate", base_url.trim_end_matches('/')),
        })
    }

    pub fn allocate_url(&self) -> &str {
        &self.allocate_url
    }
}

#[async_trait]
impl SeatAllocator for HttpSeatAllocator {
    async fn allocate(&self, payload: &Value) -> Result<Value, Box<dyn Error + Send + Sync>> {
        let resp = self
            .client
            .post(&self.allocate_url)
            .json(payload)
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body }.into());
        }

        let value = resp.json::<Value>().await.map_err(UpstreamError::from)?;
        Ok(value)
    }
}
