//! Backend API base URL resolution.

use serde::{Deserialize, Serialize};

use crate::Location;

/// API URL baked in at compile time (`GATE_API_URL=... cargo build`).
pub const BUILD_TIME_API_URL: Option<&str> = option_env!("GATE_API_URL");

/// Port the frontend dev server listens on.
pub const DEV_SERVER_PORT: &str = "5173";

/// API URL used when the page is served by the dev server.
pub const DEV_API_URL: &str = "http://localhost:8000/api";

/// Port the backend listens on next to a deployed frontend.
pub const BACKEND_PORT: u16 = 8000;

/// In-cluster service URL for callers with no page location.
pub const SERVER_API_URL: &str = "http://django-service/api";

/// Which resolution branch produced an API URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlSource {
    Override,
    DevServer,
    Origin,
    ServerFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUrl {
    pub url: String,
    pub source: UrlSource,
}

/// Resolve the API base URL.
///
/// Priority: non-empty override → dev server port → page origin with the
/// backend port → in-cluster service URL.
#[must_use]
pub fn resolve_api_url(override_url: Option<&str>, location: Option<&Location>) -> String {
    resolve(override_url, location).url
}

/// Same as [`resolve_api_url`], also reporting which branch matched.
#[must_use]
pub fn resolve(override_url: Option<&str>, location: Option<&Location>) -> ResolvedUrl {
    if let Some(url) = override_url {
        if !url.trim().is_empty() {
            return ResolvedUrl {
                url: url.to_string(),
                source: UrlSource::Override,
            };
        }
    }

    match location {
        Some(location) if location.port == DEV_SERVER_PORT => ResolvedUrl {
            url: DEV_API_URL.to_string(),
            source: UrlSource::DevServer,
        },
        Some(location) => ResolvedUrl {
            url: format!(
                "{}//{}:{BACKEND_PORT}/api",
                location.protocol, location.hostname
            ),
            source: UrlSource::Origin,
        },
        None => ResolvedUrl {
            url: SERVER_API_URL.to_string(),
            source: UrlSource::ServerFallback,
        },
    }
}

fn default_url() -> String {
    BUILD_TIME_API_URL.unwrap_or_default().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Explicit API base URL. Defaults to the compile-time `GATE_API_URL`.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl ApiConfig {
    /// Whether an explicit URL is set (build time, file, or env).
    pub fn has_override(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Resolve the base URL against an optional page location.
    pub fn resolve(&self, location: Option<&Location>) -> ResolvedUrl {
        resolve(Some(&self.url), location)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::override_beats_dev_port(Some("https://x/api"), Some(Location::new("http:", "localhost", "5173")), "https://x/api")]
    #[case::override_beats_origin(Some("https://x/api"), Some(Location::new("https:", "app.example.com", "")), "https://x/api")]
    #[case::override_without_location(Some("https://x/api"), None, "https://x/api")]
    #[case::dev_port(None, Some(Location::new("http:", "127.0.0.1", "5173")), DEV_API_URL)]
    #[case::empty_override_is_ignored(Some(""), Some(Location::new("http:", "localhost", "5173")), DEV_API_URL)]
    #[case::origin_default_port(None, Some(Location::new("https:", "app.example.com", "")), "https://app.example.com:8000/api")]
    #[case::origin_custom_port(None, Some(Location::new("http:", "10.0.0.7", "3000")), "http://10.0.0.7:8000/api")]
    #[case::no_location(None, None, SERVER_API_URL)]
    #[case::blank_override_no_location(Some("   "), None, SERVER_API_URL)]
    fn resolves_api_url(
        #[case] override_url: Option<&str>,
        #[case] location: Option<Location>,
        #[case] expected: &str,
    ) {
        assert_eq!(resolve_api_url(override_url, location.as_ref()), expected);
    }

    #[test]
    fn override_is_returned_verbatim() {
        let resolved = resolve(Some("http://api.internal/api/"), None);
        assert_eq!(resolved.url, "http://api.internal/api/");
        assert_eq!(resolved.source, UrlSource::Override);
    }

    #[test]
    fn reports_source_per_branch() {
        let dev = Location::new("http:", "localhost", "5173");
        let prod = Location::new("https:", "example.com", "");
        assert_eq!(resolve(None, Some(&dev)).source, UrlSource::DevServer);
        assert_eq!(resolve(None, Some(&prod)).source, UrlSource::Origin);
        assert_eq!(resolve(None, None).source, UrlSource::ServerFallback);
    }

    #[test]
    fn api_config_resolves_through_its_url() {
        let config = ApiConfig {
            url: "https://api.example.com/api".into(),
        };
        assert!(config.has_override());
        assert_eq!(config.resolve(None).url, "https://api.example.com/api");

        let config = ApiConfig { url: String::new() };
        assert!(!config.has_override());
        assert_eq!(config.resolve(None).url, SERVER_API_URL);
    }
}
