use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.store.logout().await;
    super::report(&outcome, ctx, flags)
}
