use async_trait::async_trait;
use serde_json::Value;

/// The external service that actually computes seat assignments.
///
/// The payload goes out and comes back as raw JSON; the relay does not own that contract.
#[async_trait]
pub trait SeatAllocator: Send + Sync {
    async fn allocate(
        &self,
        payload: &Value,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>>;
}
