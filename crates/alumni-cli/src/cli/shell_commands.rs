use clap::{Parser, Subcommand};

/// One line typed at the `alumni>` prompt.
#[derive(Debug, Parser)]
#[command(
    name = "alumni>",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Events accepted by the interactive session.
///
/// Missing credentials are prompted for.
#[derive(Clone, Debug, Subcommand)]
pub enum ShellCommand {
    /// Create an account and sign in.
    Register {
        email: Option<String>,
        password: Option<String>,
    },
    /// Sign in.
    Login {
        email: Option<String>,
        password: Option<String>,
    },
    /// Sign out.
    Logout,
    /// Show your profile.
    Profile,
    /// Edit your profile field by field.
    Edit,
    /// Show the alumni directory.
    Alumni,
    /// Show upcoming events.
    Events,
    /// Leave the session.
    #[command(alias = "exit")]
    Quit,
}
