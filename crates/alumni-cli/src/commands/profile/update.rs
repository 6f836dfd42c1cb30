use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileUpdateArgs;
use crate::commands::shared::{StatusResponse, emit_status, sign_in};
use crate::context::{AppContext, AppError};
use crate::messages;

pub fn run(args: ProfileUpdateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    sign_in(ctx, &args.credentials)?;
    ctx.update_profile(args.fields.into_fields())
        .map_err(AppError::into_report)?;
    emit_status(&StatusResponse::project(ctx, messages::PROFILE_UPDATED), flags)
}
