use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::commands::shared::{StatusResponse, emit_status, sign_in};
use crate::context::AppContext;
use crate::messages;

/// Handle `alumni login`: the profile page and the alumni directory.
pub fn handle(args: &LoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    sign_in(ctx, &args.credentials)?;
    let limit = ctx.list_limit(flags.limit);
    let response = StatusResponse::project(ctx, messages::LOGGED_IN).with_alumni(ctx, limit);
    emit_status(&response, flags)
}
