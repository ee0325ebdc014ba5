use anyhow::Context;
use gate_config::{GateConfig, Location};

use crate::cli::GlobalFlags;

pub fn load_config() -> anyhow::Result<GateConfig> {
    GateConfig::load_with_dotenv().context("failed to load gatehouse configuration")
}

/// Page location from `--origin`, if given.
pub fn origin(flags: &GlobalFlags) -> anyhow::Result<Option<Location>> {
    flags
        .origin
        .as_deref()
        .map(Location::parse)
        .transpose()
        .context("invalid --origin")
}
