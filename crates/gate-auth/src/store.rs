//! Observable auth state backed by the session endpoints.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::client::ApiClient;
use crate::subscribers::{Listeners, Subscription, lock};
use crate::wire::{
    CredentialsResponse, LOGIN_PATH, LOGOUT_PATH, LoginRequest, REGISTER_PATH, RegisterRequest,
    SESSION_PATH, SessionResponse,
};
use crate::{AuthError, AuthOutcome, AuthState};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const LOGOUT_FAILED: &str = "Logout failed";
const NETWORK_ERROR: &str = "Network error";

/// Holds the current [`AuthState`] and runs the auth round trips.
///
/// Each operation performs one request and then swaps in a whole new
/// snapshot, notifying subscribers in registration order. Clones share the
/// same state and subscribers.
///
/// Swaps and notification passes are serialized, so the last state a
/// subscriber sees is always the current snapshot. Callbacks may read
/// [`AuthStore::snapshot`] but must not subscribe or trigger another change.
#[derive(Debug, Clone)]
pub struct AuthStore {
    client: ApiClient,
    state: Arc<Mutex<Arc<AuthState>>>,
    listeners: Arc<Mutex<Listeners>>,
    dispatch: Arc<Mutex<()>>,
}

impl AuthStore {
    /// New store in the [`AuthState::initial`] (loading) state.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(Arc::new(AuthState::initial()))),
            listeners: Arc::new(Mutex::new(Listeners::default())),
            dispatch: Arc::new(Mutex::new(())),
        }
    }

    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<AuthState> {
        Arc::clone(&lock(&self.state))
    }

    /// Register `callback`, call it once with the current snapshot, then on
    /// every change until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let _dispatch = lock(&self.dispatch);
        let (id, listener) = lock(&self.listeners).register(callback);
        let subscription = Subscription::new(id, &listener, &self.listeners);
        listener.notify(&self.snapshot());
        subscription
    }

    /// Refresh state from `GET /auth/user/`.
    ///
    /// Any failure (transport, non-2xx, unreadable body) leaves the store
    /// signed out. Nothing is returned to the caller.
    pub async fn check_auth(&self) {
        let next = match self.fetch_session().await {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(%error, "auth check failed");
                AuthState::signed_out()
            }
        };
        self.replace(next);
    }

    pub async fn login(&self, username: &str, password: &str) -> AuthOutcome {
        let body = LoginRequest { username, password };
        self.submit_credentials(LOGIN_PATH, &body, LOGIN_FAILED).await
    }

    pub async fn register(&self, username: &str, password: &str, email: &str) -> AuthOutcome {
        let body = RegisterRequest {
            username,
            password,
            email,
        };
        self.submit_credentials(REGISTER_PATH, &body, REGISTRATION_FAILED)
            .await
    }

    /// End the session. Any HTTP response counts as success.
    pub async fn logout(&self) -> AuthOutcome {
        match self.client.post(LOGOUT_PATH).await {
            Ok(response) => {
                tracing::debug!(status = %response.status(), "logout acknowledged");
                self.replace(AuthState::signed_out());
                AuthOutcome::Success
            }
            Err(error) => {
                tracing::warn!(%error, "logout failed");
                AuthOutcome::failure(LOGOUT_FAILED)
            }
        }
    }

    async fn fetch_session(&self) -> Result<AuthState, AuthError> {
        let response = self.client.get(SESSION_PATH).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: "session check rejected".into(),
            });
        }

        let body: SessionResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Malformed(format!("session body: {e}")))?;

        AuthState::settled(body.user, body.authenticated)
            .ok_or_else(|| AuthError::Malformed("authenticated session without user".into()))
    }

    async fn submit_credentials<B>(&self, path: &str, body: &B, fallback: &str) -> AuthOutcome
    where
        B: Serialize + Sync,
    {
        match self.exchange_credentials(path, body).await {
            Ok(state) => {
                self.replace(state);
                AuthOutcome::Success
            }
            Err(error @ AuthError::Rejected { .. }) => {
                tracing::debug!(%error, path, "credentials rejected");
                AuthOutcome::failure(error.server_message().unwrap_or(fallback))
            }
            Err(error) => {
                tracing::warn!(%error, path, "credentials request failed");
                AuthOutcome::failure(NETWORK_ERROR)
            }
        }
    }

    async fn exchange_credentials<B>(&self, path: &str, body: &B) -> Result<AuthState, AuthError>
    where
        B: Serialize + Sync,
    {
        let response = self.client.post_json(path, body).await?;
        let status = response.status();
        let reply: CredentialsResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Malformed(format!("{path} body: {e}")))?;

        if !(status.is_success() && reply.success) {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: reply.error_message(),
            });
        }

        let user = reply
            .user
            .ok_or_else(|| AuthError::Malformed(format!("{path}: success without user")))?;
        Ok(AuthState::signed_in(user))
    }

    /// Swap in `next` and notify subscribers.
    fn replace(&self, next: AuthState) {
        let next = Arc::new(next);
        let _dispatch = lock(&self.dispatch);
        *lock(&self.state) = Arc::clone(&next);

        let listeners = lock(&self.listeners).ordered();
        for listener in listeners {
            listener.notify(&next);
        }
    }
}
