use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// User record as returned by the backend. Passed through untouched.
pub type UserRecord = serde_json::Value;

/// Snapshot of the client's authentication state.
///
/// `authenticated` implies `user` is present. The constructors are the only
/// way to build a value, so every snapshot upholds that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthState {
    user: Option<UserRecord>,
    authenticated: bool,
    loading: bool,
}

impl AuthState {
    /// State before the first session check completes.
    pub const fn initial() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }

    pub const fn signed_out() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: false,
        }
    }

    pub const fn signed_in(user: UserRecord) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
            loading: false,
        }
    }

    /// Settled state as reported by a session check.
    ///
    /// Returns `None` when the backend claims `authenticated` without a user.
    pub fn settled(user: Option<UserRecord>, authenticated: bool) -> Option<Self> {
        if authenticated && user.is_none() {
            return None;
        }
        Some(Self {
            user,
            authenticated,
            loading: false,
        })
    }

    pub const fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Result of a login, register, or logout call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure { error: String },
}

impl AuthOutcome {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { error } => Some(error.as_str()),
        }
    }
}

/// Serializes as `{"success": true}` or `{"success": false, "error": "..."}`.
impl Serialize for AuthOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success => {
                let mut s = serializer.serialize_struct("AuthOutcome", 1)?;
                s.serialize_field("success", &true)?;
                s.end()
            }
            Self::Failure { error } => {
                let mut s = serializer.serialize_struct("AuthOutcome", 2)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}
