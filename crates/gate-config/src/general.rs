//! General application configuration.

use serde::{Deserialize, Serialize};

/// Build flavour the client runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    Production,
}

impl Default for RuntimeMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Development or production. Defaults to the build profile.
    #[serde(default)]
    pub mode: RuntimeMode,
}

impl GeneralConfig {
    pub fn is_development(&self) -> bool {
        self.mode == RuntimeMode::Development
    }

    pub fn is_production(&self) -> bool {
        self.mode == RuntimeMode::Production
    }
}
