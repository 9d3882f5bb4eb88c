//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the [`SessionManager`] for the whole app and
//! mirrors its state into a `Signal` that components read through
//! [`use_session`]. Action methods on [`SessionHandle`] delegate to the
//! manager and then refresh the signal, so every subscriber re-renders
//! with the post-action state.

use std::sync::Arc;

use dioxus::prelude::*;

use api::models::{LoginResponse, RegisterRequest, RegisterResponse};
use api::{
    ApiConfig, ApiError, AuthApi, CredentialTransport, DevicesApi, SessionManager, SessionState,
    StatisticsApi,
};
use store::KeyValueStorage;

fn default_storage() -> Arc<dyn KeyValueStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStorage::new())
    }
}

/// Cloneable handle to the app-wide session.
#[derive(Clone)]
pub struct SessionHandle {
    manager: Arc<SessionManager>,
    state: Signal<SessionState>,
}

impl SessionHandle {
    /// Current session state (reactive read).
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.manager.client())
    }

    pub fn devices(&self) -> DevicesApi {
        DevicesApi::new(self.manager.client())
    }

    pub fn statistics(&self) -> StatisticsApi {
        StatisticsApi::new(self.manager.client())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let result = self.manager.login(email, password).await;
        self.sync();
        result
    }

    pub async fn register(&self, data: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let result = self.manager.register(data).await;
        self.sync();
        result
    }

    pub async fn complete_oauth(&self, code: &str) -> Result<LoginResponse, ApiError> {
        let result = self.manager.complete_oauth(code).await;
        self.sync();
        result
    }

    pub async fn logout(&self) {
        self.manager.logout().await;
        self.sync();
    }

    pub async fn check_session(&self) -> bool {
        let valid = self.manager.check_session().await;
        self.sync();
        valid
    }

    fn sync(&self) {
        let mut state = self.state;
        state.set(self.manager.state());
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the session for the app.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let manager = use_hook(|| {
        SessionManager::bootstrap(
            ApiConfig::from_env(),
            CredentialTransport::default(),
            default_storage(),
            Arc::new(|path: &str| api::http::force_navigation(path)),
        )
    });
    let state = use_signal(|| manager.state());
    let handle = SessionHandle { manager, state };
    let provided = use_context_provider(|| handle);

    // Revalidate the persisted credential on mount.
    let checker = provided.clone();
    let _ = use_resource(move || {
        let checker = checker.clone();
        async move {
            if checker.state().is_authenticated() {
                checker.check_session().await;
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button that logs the current user out.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    let onclick = move |_| {
        let session = session.clone();
        async move {
            session.logout().await;
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
