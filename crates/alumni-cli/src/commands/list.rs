use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::render_alumni;
use crate::views::AlumniListView;

/// Handle `alumni list`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = AlumniListView::project(
        &ctx.alumni(),
        ctx.avatar_style(),
        ctx.list_limit(flags.limit),
    );
    println!("{}", render_alumni(&view, flags.format)?);
    Ok(())
}
