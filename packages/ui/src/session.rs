//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] reads the persisted session once at start-up and shares
//! it through a [`SessionHandle`]. Views never touch storage directly: they
//! call [`SessionHandle::sign_in`] / [`SessionHandle::sign_out`], and build
//! their API client with [`SessionHandle::client`].

use api::{rejects_session, ApiClient, ApiError, TokenResponse};
use dioxus::prelude::*;
use store::{HubConfig, Session, UserInfo, Viewer};

use crate::persist::make_session_store;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            loading: true,
        }
    }
}

/// Copyable handle to the session context.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    state: Signal<SessionState>,
    api: Signal<ApiClient>,
}

impl SessionHandle {
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    pub fn session(&self) -> Session {
        self.state.read().session.clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.read().session.user.clone()
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::of(&self.state.read().session)
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// API client carrying the current bearer token, if any.
    pub fn client(&self) -> ApiClient {
        let token = self.state.read().session.token.clone();
        self.api.read().clone().with_token(token)
    }

    /// Persist a fresh login and publish it.
    pub async fn sign_in(mut self, response: TokenResponse) {
        let session = response.into_session();
        if let Err(e) = make_session_store().save(&session).await {
            tracing::error!("Failed to persist session: {}", e);
        }
        if let Some(user) = &session.user {
            tracing::info!(user_id = user.id, role = ?user.role, "session started");
        }
        self.state.set(SessionState {
            session,
            loading: false,
        });
    }

    pub async fn sign_out(mut self) {
        make_session_store().clear().await;
        self.state.set(SessionState {
            session: Session::default(),
            loading: false,
        });
        tracing::info!("signed out");
    }

    /// Pass `result` through, signing out first when the API rejected the
    /// token. The guard then sends the user to the login page.
    pub async fn check<T>(self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            let rejected = rejects_session(err, &self.state.read().session);
            if rejected {
                tracing::warn!("session rejected by the API, signing out");
                self.sign_out().await;
            }
        }
        result
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Get the configuration provided by [`SessionProvider`].
pub fn use_config() -> HubConfig {
    use_context::<HubConfig>()
}

/// Provider component that manages the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(config: HubConfig, children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    let api = use_signal(|| ApiClient::from_config(&config));

    // Read the persisted session on mount
    let _ = use_resource(move || async move {
        let session = make_session_store().load().await;
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "persisted session loaded"
        );
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| config.clone());
    use_context_provider(|| SessionHandle { state, api });

    rsx! {
        {children}
    }
}
