//! # gate-auth
//!
//! Client-side authentication for a session-cookie backend.
//!
//! [`ApiClient`] wraps `reqwest` with a cookie store and the default headers
//! the backend expects. [`AuthStore`] owns the current [`AuthState`], runs the
//! check/login/register/logout round trips, and notifies subscribers after
//! every change.

pub mod client;
pub mod error;
pub mod state;
pub mod store;
mod subscribers;
pub mod wire;

pub use client::ApiClient;
pub use error::AuthError;
pub use state::{AuthOutcome, AuthState, UserRecord};
pub use store::AuthStore;
pub use subscribers::Subscription;

/// Build a store for `base_url`.
///
/// # Errors
///
/// Returns `AuthError::Client` if the HTTP client cannot be constructed.
pub fn connect(base_url: impl Into<String>) -> Result<AuthStore, AuthError> {
    ApiClient::new(base_url).map(AuthStore::new)
}
