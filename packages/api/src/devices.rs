//! # Device facade
//!
//! CRUD operations for the user's registered tracker devices and their API
//! tokens. The client keeps no durable copy of any of this; every panel
//! refresh is a fresh `get_all`.

use std::sync::Arc;

use serde_json::json;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{CreateDeviceRequest, CreateTokenRequest, Device, DeviceToken, MessageResponse};

/// Thin client for the `/devices` endpoints.
#[derive(Clone)]
pub struct DevicesApi {
    client: Arc<ApiClient>,
}

impl DevicesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /devices` — all devices belonging to the current user.
    pub async fn get_all(&self) -> Result<Vec<Device>, ApiError> {
        self.client.get("/devices").await
    }

    /// `POST /devices/new`.
    pub async fn create(&self, data: &CreateDeviceRequest) -> Result<Device, ApiError> {
        self.client.post("/devices/new", data).await
    }

    /// `POST /devices/tokens` with `device_id` merged into the body. The
    /// response is the only place the token secret ever appears.
    pub async fn create_token(
        &self,
        device_id: i64,
        data: &CreateTokenRequest,
    ) -> Result<DeviceToken, ApiError> {
        let body = json!({
            "device_id": device_id,
            "token_name": data.token_name,
            "expires_in_days": data.expires_in_days,
        });
        self.client.post("/devices/tokens", &body).await
    }

    /// `GET /devices/{id}/tokens` — token metadata, secrets omitted.
    pub async fn get_tokens(&self, device_id: i64) -> Result<Vec<DeviceToken>, ApiError> {
        self.client.get(&format!("/devices/{device_id}/tokens")).await
    }

    /// `DELETE /devices/{id}/tokens/{tokenId}`.
    pub async fn revoke_token(
        &self,
        device_id: i64,
        token_id: i64,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .delete(&format!("/devices/{device_id}/tokens/{token_id}"))
            .await
    }

    /// `DELETE /devices/{id}`.
    pub async fn delete(&self, device_id: i64) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/devices/{device_id}")).await
    }
}
