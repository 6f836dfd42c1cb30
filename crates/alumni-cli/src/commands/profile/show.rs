use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileShowArgs;
use crate::commands::shared::sign_in;
use crate::context::AppContext;
use crate::output::output;
use crate::views::ProfileView;

pub fn run(args: &ProfileShowArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    sign_in(ctx, &args.credentials)?;
    output(
        &ProfileView::project(ctx.session(), ctx.avatar_style()),
        flags.format,
    )
}
