use gate_config::{RuntimeMode, UrlSource};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ConfigResponse<'a> {
    api_url: &'a str,
    source: UrlSource,
    mode: RuntimeMode,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &ConfigResponse {
            api_url: ctx.store.client().base_url(),
            source: ctx.api.source,
            mode: ctx.config.general.mode,
        },
        flags.format,
    )
}
