//! Browser-style page location.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::ConfigError;

/// The parts of a page location the resolver looks at.
///
/// Follows `window.location` conventions: `protocol` keeps its trailing
/// colon (`"https:"`) and `port` is empty when the scheme's default port
/// is in use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    pub protocol: String,
    pub hostname: String,
    pub port: String,
}

impl Location {
    pub fn new(
        protocol: impl Into<String>,
        hostname: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
            port: port.into(),
        }
    }

    /// Parse a page origin such as `http://localhost:5173/login`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `origin` is not an absolute URL
    /// with a host.
    pub fn parse(origin: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(origin).map_err(|e| ConfigError::InvalidValue {
            field: "origin".into(),
            reason: format!("{origin}: {e}"),
        })?;
        Self::try_from(&url)
    }
}

impl TryFrom<&Url> for Location {
    type Error = ConfigError;

    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        let hostname = url.host_str().ok_or_else(|| ConfigError::InvalidValue {
            field: "origin".into(),
            reason: format!("{url}: missing host"),
        })?;

        // `Url::port` is None when the port is the scheme default.
        let port = url.port().map(|p| p.to_string()).unwrap_or_default();

        Ok(Self::new(format!("{}:", url.scheme()), hostname, port))
    }
}
