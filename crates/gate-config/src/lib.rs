//! # gate-config
//!
//! API base URL resolution and layered configuration loading for Gatehouse.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GATE_*` prefix, `__` as separator)
//! 2. Project-level `.gatehouse/config.toml`
//! 3. User-level `~/.config/gatehouse/config.toml`
//! 4. Built-in defaults, including the compile-time `GATE_API_URL`
//!
//! # Usage
//!
//! ```no_run
//! use gate_config::{GateConfig, Location};
//!
//! let config = GateConfig::load_with_dotenv().expect("config");
//! let origin = Location::parse("http://localhost:5173").expect("origin");
//! let resolved = config.api.resolve(Some(&origin));
//! println!("API at {}", resolved.url);
//! ```

mod api;
mod error;
mod general;
mod location;

pub use api::{
    ApiConfig, BACKEND_PORT, BUILD_TIME_API_URL, DEV_API_URL, DEV_SERVER_PORT, ResolvedUrl,
    SERVER_API_URL, UrlSource, resolve, resolve_api_url,
};
pub use error::ConfigError;
pub use general::{GeneralConfig, RuntimeMode};
pub use location::Location;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GateConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GateConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".gatehouse/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GATE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gatehouse").join("config.toml"))
    }
}
