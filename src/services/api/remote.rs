use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, BookingApi};
use crate::models::{BookedSlot, BookingPayload, BookingRecord, ProductPage, Service};

pub struct RemoteBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteBookingApi {
    /// `base_url` includes the `/api` prefix. The cookie store is required:
    /// the remote correlates the CSRF token with the session cookie it sets
    /// on the token request.
    pub fn new(base_url: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Deserialize)]
struct CsrfResponse {
    csrf_token: String,
}

#[async_trait]
impl BookingApi for RemoteBookingApi {
    async fn csrf_token(&self) -> Result<String, ApiError> {
        let resp: CsrfResponse = self.get_json("/csrf-token").await?;
        Ok(resp.csrf_token)
    }

    async fn booked_slots(&self) -> Result<Vec<BookedSlot>, ApiError> {
        self.get_json("/bookings").await
    }

    async fn services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_json("/services").await
    }

    async fn products(&self, page: u32) -> Result<ProductPage, ApiError> {
        self.get_json(&format!("/products?page={page}")).await
    }

    async fn create_booking(
        &self,
        payload: &BookingPayload,
        csrf_token: &str,
    ) -> Result<BookingRecord, ApiError> {
        let resp = self
            .client
            .post(format!("{}/bookings/full-store", self.base_url))
            .header("X-CSRF-TOKEN", csrf_token)
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "booking creation rejected");
            return Err(ApiError::Status(status.as_u16()));
        }

        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
