use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use smartbus_shared::models::{
    AllocationRequest, AllocationResponse, Booking, BookingStored, FeedbackRequest, FeedbackStored,
    HistoryPoint, NewBooking, TrainingExport,
};
use smartbus_shared::API_VERSION;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// HTTP client for the relay. Construct one and pass it to whatever needs it.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_http_client(http, base_url))
    }

    /// Uses a preconfigured `reqwest::Client`, e.g. with custom timeouts or TLS.
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `<base>/v1/<segments..>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);
        let resp = self.http.get(url).query(query).send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        debug!("POST {}", url);
        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        resp.json().await.map_err(Into::into)
    }

    pub async fn health(&self) -> ClientResult<Value> {
        self.get(&["health"], &[]).await
    }

    pub async fn allocate(&self, request: &AllocationRequest) -> ClientResult<AllocationResponse> {
        self.post(&["allocate"], request).await
    }

    pub async fn save_booking(&self, booking: &NewBooking) -> ClientResult<BookingStored> {
        self.post(&["allocations"], booking).await
    }

    /// Passenger ids are opaque; `/`, `#` and friends are sent encoded.
    pub async fn passenger_history(&self, passenger_id: &str) -> ClientResult<Vec<HistoryPoint>> {
        self.get(&["histories", passenger_id], &[]).await
    }

    pub async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get(&["bookings"], &[]).await
    }

    pub async fn submit_feedback(
        &self,
        feedback: &FeedbackRequest,
    ) -> ClientResult<FeedbackStored> {
        self.post(&["feedback"], feedback).await
    }

    pub async fn training_export(&self, since: Option<NaiveDate>) -> ClientResult<TrainingExport> {
        let query: Vec<(&str, String)> = since
            .map(|d| vec![("since", d.format("%Y-%m-%d").to_string())])
            .unwrap_or_default();
        self.get(&["feedback"], &query).await
    }
}
