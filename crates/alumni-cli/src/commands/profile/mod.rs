mod show;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::context::AppContext;

/// Handle `alumni profile`.
pub fn handle(
    action: ProfileCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show(args) => show::run(&args, ctx, flags),
        ProfileCommands::Update(args) => update::run(args, ctx, flags),
    }
}
