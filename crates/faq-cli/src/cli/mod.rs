use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{AuthAction, Commands};

/// Top-level CLI parser for the `faq` binary.
#[derive(Debug, Parser)]
#[command(name = "faq", version, about = "FAQ board - submit, list, and moderate Q&A entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["faq", "--format", "raw", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List { .. }));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["faq", "list", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["faq", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ask_requires_both_fields() {
        let parsed = Cli::try_parse_from(["faq", "ask", "--question", "q only"]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["faq", "ask", "--question", "q", "--answer", "a"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Ask { .. }));
    }

    #[test]
    fn get_and_delete_take_positional_ids() {
        let cli = Cli::try_parse_from(["faq", "get", "faq-abc12345"]).expect("parse");
        match cli.command {
            Commands::Get { id } => assert_eq!(id, "faq-abc12345"),
            other => panic!("expected Get, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["faq", "delete", "faq-abc12345"]).expect("parse");
        assert!(matches!(cli.command, Commands::Delete { .. }));
    }
}
