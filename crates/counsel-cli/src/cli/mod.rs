use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `counsel` binary.
#[derive(Debug, Parser)]
#[command(
    name = "counsel",
    version,
    about = "Counsel - marketing CRM for law firms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start from an empty store instead of the sample data
    #[arg(long, global = true)]
    pub empty: bool,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// `default_format` applies when `--format` was not given.
    #[must_use]
    pub fn global_flags(&self, default_format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(default_format),
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            empty: self.empty,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::LeadCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "counsel",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["counsel", "analytics", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Analytics));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["counsel", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_format_falls_back_to_default() {
        let cli = Cli::try_parse_from(["counsel", "dashboard"]).expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags(OutputFormat::Table);
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.color, ColorMode::Auto);
        assert!(!flags.empty);
    }

    #[test]
    fn explicit_format_beats_default() {
        let cli = Cli::try_parse_from(["counsel", "--format", "raw", "--empty", "dashboard"])
            .expect("cli should parse");
        let flags = cli.global_flags(OutputFormat::Table);
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(flags.empty);
    }

    #[test]
    fn lead_status_takes_id_and_label() {
        let cli = Cli::try_parse_from(["counsel", "lead", "status", "2", "qualified"])
            .expect("cli should parse");
        let Commands::Lead {
            action: LeadCommands::Status { id, status },
        } = cli.command
        else {
            panic!("expected lead status");
        };
        assert_eq!(id, 2);
        assert_eq!(status, "qualified");
    }

    #[test]
    fn client_add_collects_repeated_practice_areas() {
        let cli = Cli::try_parse_from([
            "counsel",
            "client",
            "add",
            "--name",
            "Doe Law",
            "--practice-area",
            "Family Law",
            "--practice-area",
            "Estate Planning",
        ])
        .expect("cli should parse");
        let Commands::Client {
            action: super::subcommands::ClientCommands::Add(args),
        } = cli.command
        else {
            panic!("expected client add");
        };
        assert_eq!(args.practice_areas, ["Family Law", "Estate Planning"]);
        assert_eq!(args.name.as_deref(), Some("Doe Law"));
    }
}
