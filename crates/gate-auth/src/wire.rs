//! Request and response bodies of the backend auth endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::UserRecord;

pub const SESSION_PATH: &str = "/auth/user/";
pub const LOGIN_PATH: &str = "/auth/login/";
pub const REGISTER_PATH: &str = "/auth/register/";
pub const LOGOUT_PATH: &str = "/auth/logout/";

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: &'a str,
}

/// Body of `GET /auth/user/`.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Body of the login and register endpoints.
#[derive(Debug, Deserialize)]
pub struct CredentialsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserRecord>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl CredentialsResponse {
    /// Server error text. Non-string errors (e.g. field maps) are rendered as JSON.
    pub fn error_message(&self) -> String {
        match &self.error {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
        }
    }
}
