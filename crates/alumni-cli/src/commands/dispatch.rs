use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Register(args) => commands::register::handle(&args, ctx, flags),
        Commands::Login(args) => commands::login::handle(&args, ctx, flags),
        Commands::Profile { action } => commands::profile::handle(action, ctx, flags),
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Shell => commands::shell::handle(ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
