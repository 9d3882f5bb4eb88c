//! # HTTP client adapter
//!
//! [`ApiClient`] wraps `reqwest` with the deployment's base URL and timeout
//! and applies the two cross-cutting behaviors every facade relies on:
//!
//! - **Credential attachment** — with [`CredentialTransport::BearerHeader`]
//!   the current `access_token` is read from storage and sent as an
//!   `Authorization: Bearer` header on every request. With
//!   [`CredentialTransport::Cookie`] nothing is attached and the browser
//!   carries the session cookie itself. The two transports are mutually
//!   exclusive deployment variants.
//! - **401 interception** — any unauthorized response, from any facade,
//!   erases the stored identity and fires the unauthorized hook. In the
//!   browser build the hook forces a full navigation to `/auth`; tests
//!   inject a recording closure instead.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use store::{KeyValueStorage, SessionSnapshot, ACCESS_TOKEN_KEY};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// How the bearer credential travels to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialTransport {
    /// `Authorization: Bearer <token>` sourced from durable storage.
    #[default]
    BearerHeader,
    /// Browser-managed session cookie; the client attaches nothing.
    Cookie,
}

/// Callback fired after a 401 response has cleared the stored identity.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Shape of the server's error payload.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// The configured HTTP client shared by all facades.
#[derive(Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    transport: CredentialTransport,
    storage: Arc<dyn KeyValueStorage>,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: CredentialTransport,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let inner = builder.build().expect("failed to construct HTTP client");
        Self {
            inner,
            base_url: config.base_url,
            transport,
            storage,
            on_unauthorized: Arc::new(|| {}),
        }
    }

    /// Replace the 401 hook. The browser build installs a full navigation
    /// to `/auth`; tests install a recorder.
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = hook;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.inner.get(self.url(path))).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.inner.post(self.url(path)).json(body)).await
    }

    /// POST with an empty body (logout, me).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.inner.post(self.url(path))).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.inner.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.transport {
            CredentialTransport::BearerHeader => match self.storage.get(ACCESS_TOKEN_KEY) {
                Some(token) => builder.bearer_auth(token),
                None => builder,
            },
            CredentialTransport::Cookie => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = error_message(status, &response.text().await.unwrap_or_default());
            if status == reqwest::StatusCode::UNAUTHORIZED {
                tracing::debug!("401 from server, clearing stored identity");
                SessionSnapshot::clear(self.storage.as_ref());
                (self.on_unauthorized)();
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }
}

/// Prefer the server's `detail` payload, fall back to the status line.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

/// Force a full browser navigation (not a router transition).
///
/// No-op outside the browser so shared code can call it unconditionally.
pub fn force_navigation(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("navigation to {path} requested outside the browser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;
    use store::{MemoryStorage, USER_KEY};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, storage: MemoryStorage) -> ApiClient {
        ApiClient::new(
            ApiConfig::default().with_base_url(server.uri()),
            CredentialTransport::BearerHeader,
            Arc::new(storage),
        )
    }

    #[tokio::test]
    async fn test_bearer_token_attached_from_storage() {
        let server = MockServer::start().await;
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "T");

        Mock::given(method("GET"))
            .and(path("/devices"))
            .and(header("authorization", "Bearer T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, storage);
        let devices: Vec<serde_json::Value> = client.get("/devices").await.unwrap();
        assert!(devices.is_empty());
    }

    #[tokio::test]
    async fn test_no_header_without_stored_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryStorage::new());
        let _: Vec<serde_json::Value> = client.get("/devices").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0]
            .headers
            .iter()
            .all(|(name, _)| !name.as_str().eq_ignore_ascii_case("authorization")));
    }

    #[tokio::test]
    async fn test_cookie_transport_attaches_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "T");
        let client = ApiClient::new(
            ApiConfig::default().with_base_url(server.uri()),
            CredentialTransport::Cookie,
            Arc::new(storage),
        );
        let _: Vec<serde_json::Value> = client.get("/devices").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0]
            .headers
            .iter()
            .all(|(name, _)| !name.as_str().eq_ignore_ascii_case("authorization")));
    }

    #[tokio::test]
    async fn test_401_clears_identity_and_fires_hook() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authorized"})),
            )
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "T");
        storage.set(USER_KEY, r#"{"id":1,"email":"a@b.com"}"#);

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let client = client_for(&server, storage.clone())
            .with_unauthorized_hook(Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

        let err = client
            .get::<serde_json::Value>("/devices")
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Not authorized");
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_server_detail_surfaces_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid email"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryStorage::new());
        let err = client
            .post::<_, serde_json::Value>("/auth/login", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Invalid email");
    }

    #[tokio::test]
    async fn test_status_without_detail_uses_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryStorage::new());
        let err = client
            .get::<serde_json::Value>("/devices")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryStorage::new());
        let err = client
            .get::<Vec<serde_json::Value>>("/devices")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
