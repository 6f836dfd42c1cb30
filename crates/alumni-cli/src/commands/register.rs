use crate::cli::GlobalFlags;
use crate::cli::root_commands::RegisterArgs;
use crate::commands::shared::{StatusResponse, emit_status};
use crate::context::{AppContext, AppError};
use crate::messages;

/// Handle `alumni register`.
pub fn handle(args: &RegisterArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.register(&args.credentials.email, &args.credentials.password)
        .map_err(AppError::into_report)?;
    emit_status(&StatusResponse::project(ctx, messages::REGISTERED), flags)
}
