use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod shell_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `alumni` binary.
#[derive(Debug, Parser)]
#[command(
    name = "alumni",
    version,
    about = "Alumni directory - profiles for your graduating class"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max alumni rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the persisted mappings (overrides storage.data_dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::ProfileCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "alumni", "--format", "table", "--limit", "10", "--verbose", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["alumni", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["alumni", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn register_requires_email_and_password() {
        assert!(Cli::try_parse_from(["alumni", "register", "--email", "a@x.com"]).is_err());
        let cli = Cli::try_parse_from([
            "alumni",
            "register",
            "--email",
            "a@x.com",
            "--password",
            "pw",
        ])
        .expect("cli should parse");
        let Commands::Register(args) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(args.credentials.email, "a@x.com");
        assert_eq!(args.credentials.password, "pw");
    }

    #[test]
    fn profile_update_fields_default_to_blank() {
        let cli = Cli::try_parse_from([
            "alumni",
            "profile",
            "update",
            "--email",
            "a@x.com",
            "--password",
            "pw",
            "--name",
            "Ada Lovelace",
        ])
        .expect("cli should parse");
        let Commands::Profile {
            action: ProfileCommands::Update(args),
        } = cli.command
        else {
            panic!("expected profile update");
        };
        let fields = args.fields.into_fields();
        assert_eq!(fields.name, "Ada Lovelace");
        assert_eq!(fields.institution, "");
        assert_eq!(fields.github_url, "");
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["alumni", "--data-dir", "/tmp/demo", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/demo"));
    }
}
