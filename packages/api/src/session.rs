//! # Session manager
//!
//! The client-side holder of authentication state. Two coarse states:
//! **anonymous** (no credential) and **authenticated** (credential
//! present); the server profile's `is_verified` flag gates the secondary
//! "verified" status on top.
//!
//! The manager is an explicitly owned object, constructed from its
//! collaborators (auth facade, storage handle, navigation hook) rather
//! than reached through a process-wide singleton, so tests can run it
//! against a mock server, an in-memory store, and a recording navigator.
//!
//! State is initialized from the durable snapshot at construction, mutated
//! only by the action methods here, and cleared entirely on logout or when
//! any request comes back 401. Racing actions are last-write-wins; there
//! is deliberately no fencing between concurrent calls.

use std::sync::{Arc, Mutex};

use store::{KeyValueStorage, SessionSnapshot, UserInfo};

use crate::auth::AuthApi;
use crate::error::ApiError;
use crate::models::{LoginResponse, RegisterRequest, RegisterResponse};

/// Reactive session state mirrored by the UI layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// A credential being present is what "authenticated" means.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_verified(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_verified)
    }
}

/// Callback used for post-action navigation (`/profile` after login,
/// `/auth` after logout or a 401).
pub type NavigateHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Owner of the session lifecycle.
pub struct SessionManager {
    auth: AuthApi,
    storage: Arc<dyn KeyValueStorage>,
    navigate: NavigateHook,
    state: Mutex<SessionState>,
}

impl SessionManager {
    /// Build a manager over an existing auth facade. Initial state comes
    /// from the persisted snapshot.
    pub fn new(auth: AuthApi, storage: Arc<dyn KeyValueStorage>, navigate: NavigateHook) -> Self {
        let snapshot = SessionSnapshot::load(storage.as_ref());
        Self {
            auth,
            storage,
            navigate,
            state: Mutex::new(SessionState {
                access_token: snapshot.access_token,
                user: snapshot.user,
                loading: false,
                error: None,
            }),
        }
    }

    /// Wire up the whole client stack: HTTP adapter (with the 401 hook
    /// navigating to `/auth`), auth facade, and manager, sharing one
    /// storage handle.
    pub fn bootstrap(
        config: crate::ApiConfig,
        transport: crate::CredentialTransport,
        storage: Arc<dyn KeyValueStorage>,
        navigate: NavigateHook,
    ) -> Arc<Self> {
        let nav = navigate.clone();
        let client = crate::ApiClient::new(config, transport, storage.clone())
            .with_unauthorized_hook(Arc::new(move || nav("/auth")));
        let auth = AuthApi::new(Arc::new(client));
        Arc::new(Self::new(auth, storage, navigate))
    }

    /// The HTTP client shared with the other facades.
    pub fn client(&self) -> Arc<crate::ApiClient> {
        self.auth.client().clone()
    }

    /// Current state, cloned for the caller.
    pub fn state(&self) -> SessionState {
        self.state.lock().unwrap().clone()
    }

    /// Submit a registration.
    ///
    /// With auto-login the server includes a credential: store it, become
    /// authenticated, and go to the profile. Without one the session stays
    /// anonymous and the response (typically "verify your email") goes back
    /// to the caller. Failures record the server message and re-signal.
    pub async fn register(&self, data: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.begin();
        match self.auth.register(&data).await {
            Ok(response) => {
                if let Some(token) = response.access_token.clone() {
                    self.store_identity(token, response.user());
                    (self.navigate)("/profile");
                }
                self.finish();
                Ok(response)
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Log in with email + password; on success the normalized identity is
    /// persisted and the user lands on `/profile`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.begin();
        match self.auth.login(email, password).await {
            Ok(response) => {
                self.store_identity(response.access_token.clone(), response.normalized_user());
                (self.navigate)("/profile");
                self.finish();
                Ok(response)
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Exchange a Google OAuth callback code for a session. Same success
    /// path as [`Self::login`]: persist the normalized identity and land on
    /// `/profile`.
    pub async fn complete_oauth(&self, code: &str) -> Result<LoginResponse, ApiError> {
        self.begin();
        match self.auth.google_callback(code).await {
            Ok(response) => {
                self.store_identity(response.access_token.clone(), response.normalized_user());
                (self.navigate)("/profile");
                self.finish();
                Ok(response)
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Log out. The remote call is best-effort; local state and storage are
    /// cleared no matter what, and the browser lands on `/auth`.
    pub async fn logout(&self) {
        self.begin();
        if let Err(err) = self.auth.logout().await {
            tracing::warn!("remote logout failed, clearing local session anyway: {err}");
        }
        self.clear();
        self.finish();
        (self.navigate)("/auth");
    }

    /// Validate the persisted credential against the server.
    ///
    /// Anonymous sessions return `false` without a network round trip.
    /// A failing check wipes the session; a passing one refreshes the
    /// cached profile.
    pub async fn check_session(&self) -> bool {
        if !self.state.lock().unwrap().is_authenticated() {
            return false;
        }
        self.begin();
        match self.auth.me().await {
            Ok(user) => {
                self.set_user(user);
                self.finish();
                true
            }
            Err(err) => {
                tracing::debug!("session check failed: {err}");
                self.clear();
                self.finish();
                false
            }
        }
    }

    fn begin(&self) {
        let mut state = self.state.lock().unwrap();
        state.loading = true;
        state.error = None;
    }

    fn finish(&self) {
        self.state.lock().unwrap().loading = false;
    }

    fn fail(&self, err: &ApiError) {
        let mut state = self.state.lock().unwrap();
        state.error = Some(err.to_string());
        state.loading = false;
    }

    fn store_identity(&self, token: String, user: UserInfo) {
        {
            let mut state = self.state.lock().unwrap();
            state.access_token = Some(token.clone());
            state.user = Some(user.clone());
        }
        SessionSnapshot {
            access_token: Some(token),
            user: Some(user),
        }
        .save(self.storage.as_ref());
    }

    fn set_user(&self, user: UserInfo) {
        self.state.lock().unwrap().user = Some(user.clone());
        let token = self.state.lock().unwrap().access_token.clone();
        SessionSnapshot {
            access_token: token,
            user: Some(user),
        }
        .save(self.storage.as_ref());
    }

    fn clear(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.access_token = None;
            state.user = None;
            state.error = None;
        }
        SessionSnapshot::clear(self.storage.as_ref());
    }
}
