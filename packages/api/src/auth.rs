//! # Auth facade
//!
//! Named remote operations over the `/auth` endpoints. Each method is a
//! single request/response mapping; errors propagate untouched as
//! [`ApiError`] and the 401 side effect lives entirely in the adapter.

use std::sync::Arc;

use store::UserInfo;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    AuthUrlResponse, ConfirmResetRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, RegisterResponse, ResetPasswordRequest,
};

/// Thin client for the authentication endpoints.
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// `POST /auth/register`. The response carries an `access_token` when
    /// the deployment auto-logs-in, otherwise only a verification message.
    pub async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.client.post("/auth/register", data).await
    }

    /// `POST /auth/login` with a JSON body of email + password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/auth/login", &body).await
    }

    /// `POST /auth/me` — the identity behind the attached credential.
    pub async fn me(&self) -> Result<UserInfo, ApiError> {
        self.client.post_empty("/auth/me").await
    }

    /// `GET /auth/verify/{token}`.
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.client.get(&format!("/auth/verify/{token}")).await
    }

    /// `POST /auth/reset-password`.
    pub async fn reset_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let body = ResetPasswordRequest {
            email: email.to_string(),
        };
        self.client.post("/auth/reset-password", &body).await
    }

    /// `POST /auth/reset-password/confirm`.
    pub async fn confirm_reset_password(
        &self,
        data: &ConfirmResetRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.post("/auth/reset-password/confirm", data).await
    }

    /// `POST /auth/logout`.
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.client.post_empty("/auth/logout").await
    }

    /// `GET /auth/google` — where to send the browser for Google sign-in.
    pub async fn google_auth_url(&self) -> Result<String, ApiError> {
        let response: AuthUrlResponse = self.client.get("/auth/google").await?;
        Ok(response.url)
    }

    /// `GET /auth/google/callback?code=…` — exchange the provider code for
    /// a session, same response shape as [`Self::login`].
    pub async fn google_callback(&self, code: &str) -> Result<LoginResponse, ApiError> {
        self.client
            .get(&format!("/auth/google/callback?code={code}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use store::MemoryStorage;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ApiConfig;
    use crate::http::CredentialTransport;

    fn auth_for(server: &MockServer) -> AuthApi {
        AuthApi::new(Arc::new(ApiClient::new(
            ApiConfig::default().with_base_url(server.uri()),
            CredentialTransport::BearerHeader,
            Arc::new(MemoryStorage::new()),
        )))
    }

    #[tokio::test]
    async fn test_login_posts_json_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "T",
                "user_id": 1,
                "email": "a@b.com"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = auth_for(&server).login("a@b.com", "pw").await.unwrap();
        assert_eq!(response.access_token, "T");
        assert_eq!(response.user_id, 1);
    }

    #[tokio::test]
    async fn test_verify_email_hits_token_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/verify/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "verified"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = auth_for(&server).verify_email("abc123").await.unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_google_callback_passes_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/google/callback"))
            .and(query_param("code", "xyz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "T",
                "user_id": 2,
                "email": "g@b.com"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = auth_for(&server).google_callback("xyz").await.unwrap();
        assert_eq!(response.user_id, 2);
    }

    #[tokio::test]
    async fn test_server_validation_message_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"detail": "Email already registered"})),
            )
            .mount(&server)
            .await;

        let data = RegisterRequest {
            email: "a@b.com".into(),
            password: "pw".into(),
            username: None,
        };
        let err = auth_for(&server).register(&data).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }
}
