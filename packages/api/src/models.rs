//! Request and response bodies for the server endpoints.
//!
//! These mirror the server's schemas one-to-one. The client performs no
//! validation of its own; a field the server stops sending simply
//! deserializes to its default.

use serde::{Deserialize, Serialize};

use store::UserInfo;

// ── Auth ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// `POST /auth/register` answer.
///
/// Deployments with auto-login include `access_token`; deployments that
/// require email verification omit it and put the instructions in
/// `message`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub access_token: Option<String>,
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: String,
    pub username: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

impl RegisterResponse {
    /// The profile implied by an auto-login registration.
    pub fn user(&self) -> UserInfo {
        UserInfo {
            id: self.user_id.unwrap_or_default(),
            email: self.email.clone(),
            username: self.username.clone(),
            is_verified: self.is_verified,
            extra: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` answer: issued credential plus the identity, partly
/// at the top level and partly (depending on server version) nested under
/// `user`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub email: String,
    pub username: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    pub user: Option<UserInfo>,
}

impl LoginResponse {
    /// Merge the top-level identity fields with the nested `user` object,
    /// nested fields winning where both are present.
    pub fn normalized_user(&self) -> UserInfo {
        let mut user = UserInfo {
            id: self.user_id,
            email: self.email.clone(),
            username: self.username.clone(),
            is_verified: self.is_verified,
            extra: Default::default(),
        };
        if let Some(nested) = &self.user {
            if nested.id != 0 {
                user.id = nested.id;
            }
            if !nested.email.is_empty() {
                user.email = nested.email.clone();
            }
            if nested.username.is_some() {
                user.username = nested.username.clone();
            }
            user.is_verified = nested.is_verified || self.is_verified;
            user.extra = nested.extra.clone();
        }
        user
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmResetRequest {
    pub token: String,
    pub new_password: String,
}

/// Plain acknowledgement body used by several endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// `GET /auth/google` answer.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUrlResponse {
    pub url: String,
}

// ── Devices ─────────────────────────────────────────────────────────

/// Platform tag reported when registering a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePlatform {
    Windows,
    Macos,
    Linux,
    Android,
    Ios,
    #[default]
    Other,
}

/// A registered tracker device, as the server reports it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Device {
    pub id: i64,
    pub device_name: String,
    pub device_id: Option<String>,
    #[serde(default)]
    pub platform: DevicePlatform,
    pub platform_version: Option<String>,
    pub client_version: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sync_enabled: bool,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateDeviceRequest {
    pub device_name: String,
    pub platform: DevicePlatform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
}

/// An API token bound to a device. `token` carries the secret only in the
/// creation response; listings return metadata alone.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeviceToken {
    pub id: i64,
    #[serde(default)]
    pub token: Option<String>,
    pub name: String,
    pub device_id: i64,
    pub created_at: Option<String>,
    pub expires_at: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTokenRequest {
    pub token_name: String,
    pub expires_in_days: u32,
}

// ── Statistics ──────────────────────────────────────────────────────

/// One dashboard card from `GET /api/statistics/overview`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatCard {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub trend: f64,
    #[serde(default)]
    pub color: String,
}

/// One row from `GET /api/statistics/top-apps`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppUsage {
    pub app: String,
    #[serde(default)]
    pub duration_secs: u64,
    #[serde(default)]
    pub percent: f64,
}
