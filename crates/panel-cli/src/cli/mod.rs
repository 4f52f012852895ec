use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `panel` binary.
#[derive(Debug, Parser)]
#[command(name = "panel", version, about = "Panel - interview records and access rules")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `database.path`)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Act as this email without authentication (development only)
    #[arg(long = "as", global = true, value_name = "EMAIL")]
    pub as_email: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
            as_email: self.as_email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::AuthCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "panel",
            "--format",
            "table",
            "--as",
            "b@x.com",
            "--verbose",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.as_email.as_deref(), Some("b@x.com"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["panel", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["panel", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_collects_repeated_interviewers_in_order() {
        let cli = Cli::try_parse_from([
            "panel",
            "create",
            "--title",
            "Onsite",
            "--start-time",
            "1760000000000",
            "--call",
            "call-1",
            "--candidate",
            "a@x.com",
            "--interviewer",
            "c@x.com",
            "--interviewer",
            "b@x.com",
            "--interviewer",
            "c@x.com",
        ])
        .expect("cli should parse");

        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.status, "scheduled");
        assert_eq!(args.description, None);
        assert_eq!(args.start_time, 1_760_000_000_000);
        assert_eq!(args.interviewer_ids, vec!["c@x.com", "b@x.com", "c@x.com"]);
    }

    #[test]
    fn create_requires_an_interviewer() {
        let parsed = Cli::try_parse_from([
            "panel",
            "create",
            "--title",
            "Onsite",
            "--start-time",
            "0",
            "--call",
            "call-1",
            "--candidate",
            "a@x.com",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn status_takes_id_and_value() {
        let cli = Cli::try_parse_from(["panel", "status", "ivw-1a2b3c4d", "completed"])
            .expect("cli should parse");
        let Commands::Status(args) = cli.command else {
            panic!("expected status");
        };
        assert_eq!(args.id, "ivw-1a2b3c4d");
        assert_eq!(args.status, "completed");
    }

    #[test]
    fn auth_login_requires_token() {
        assert!(Cli::try_parse_from(["panel", "auth", "login"]).is_err());
        let cli = Cli::try_parse_from(["panel", "auth", "login", "--token", "a.b.c"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Login(_)
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["panel", "--db", "/tmp/demo.db", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/demo.db"));
        assert_eq!(flags.as_email, None);
    }
}
