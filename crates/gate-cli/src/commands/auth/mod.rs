mod login;
mod logout;
mod register;
mod status;

use gate_auth::{AuthOutcome, AuthState};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gate auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Status => status::handle(ctx, flags).await,
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Register(args) => register::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags).await,
    }
}

#[derive(Serialize)]
struct OutcomeResponse<'a> {
    outcome: &'a AuthOutcome,
    state: &'a AuthState,
}

/// Print the outcome with the resulting state; a failure becomes the exit error.
fn report(outcome: &AuthOutcome, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.store.snapshot();
    output(
        &OutcomeResponse {
            outcome,
            state: state.as_ref(),
        },
        flags.format,
    )?;

    match outcome.error() {
        Some(error) => anyhow::bail!("{error}"),
        None => Ok(()),
    }
}
