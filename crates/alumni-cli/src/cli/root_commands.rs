use clap::{Args, Subcommand};

use crate::cli::subcommands::ProfileCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create an account and its default profile.
    Register(RegisterArgs),
    /// Log in and show your profile and the alumni list.
    Login(LoginArgs),
    /// Show or edit your profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// List every alumni profile.
    List,
    /// Interactive session (log in once, then browse and edit).
    Shell,
    /// Print JSON Schemas of the persisted records.
    Schema,
}

/// Email/password pair shared by every command that signs in.
#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}
