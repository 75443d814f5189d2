pub mod remote;

use async_trait::async_trait;

use crate::models::{BookedSlot, BookingPayload, BookingRecord, ProductPage, Service};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("booking API returned status {0}")]
    Status(u16),

    #[error("request to booking API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode booking API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the remote rejection, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// The remote booking/inventory API, behind a trait so tests can stand in
/// a mock provider.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn csrf_token(&self) -> Result<String, ApiError>;
    async fn booked_slots(&self) -> Result<Vec<BookedSlot>, ApiError>;
    async fn services(&self) -> Result<Vec<Service>, ApiError>;
    async fn products(&self, page: u32) -> Result<ProductPage, ApiError>;
    async fn create_booking(
        &self,
        payload: &BookingPayload,
        csrf_token: &str,
    ) -> Result<BookingRecord, ApiError>;
}
