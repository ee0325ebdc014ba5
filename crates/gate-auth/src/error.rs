use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),

    #[error("rejected by server (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl AuthError {
    /// Server-provided message for a rejection, if it sent a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
