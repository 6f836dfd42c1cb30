use alumni_core::entities::ProfileFields;
use clap::{Args, Subcommand};

use crate::cli::root_commands::CredentialArgs;

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show your profile.
    Show(ProfileShowArgs),
    /// Replace your profile. Omitted fields are saved blank.
    Update(ProfileUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProfileShowArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ProfileUpdateArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
    #[command(flatten)]
    pub fields: ProfileFieldArgs,
}

/// The six editable profile fields.
#[derive(Clone, Debug, Default, Args)]
pub struct ProfileFieldArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub institution: String,
    #[arg(long, default_value = "")]
    pub graduation_year: String,
    #[arg(long, default_value = "")]
    pub current_role: String,
    #[arg(long, default_value = "")]
    pub linkedin_url: String,
    #[arg(long, default_value = "")]
    pub github_url: String,
}

impl ProfileFieldArgs {
    #[must_use]
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            name: self.name,
            institution: self.institution,
            graduation_year: self.graduation_year,
            current_role: self.current_role,
            linkedin_url: self.linkedin_url,
            github_url: self.github_url,
        }
    }
}
