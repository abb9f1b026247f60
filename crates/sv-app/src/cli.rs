//! Command-line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use sv_core::config::parse_interval;

/// Step through algorithm and architecture walkthroughs in the terminal
#[derive(Parser, Debug)]
#[command(name = "stepview", version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "sv_core=debug")
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every visualization by category
    List,

    /// Print all steps of a visualization
    Show(ShowArgs),

    /// Autoplay a visualization to its last step
    Play(PlayArgs),

    /// Step through a visualization interactively
    Step(StepArgs),
}

/// Which walkthrough to open
#[derive(Args, Debug)]
pub struct Selection {
    /// Visualization slug, as printed by `list`
    pub slug: String,

    /// Variant key (defaults to the first variant)
    #[arg(long)]
    pub variant: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Print frames as JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Delay between steps, overrides the config file (e.g. "500ms", "2s")
    #[arg(long, value_parser = parse_interval)]
    pub interval: Option<Duration>,

    /// JSON player configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StepArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// JSON player configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play_with_interval() {
        let cli = Cli::try_parse_from([
            "stepview",
            "play",
            "transaction-patterns",
            "--variant",
            "2pc-error",
            "--interval",
            "250ms",
        ])
        .unwrap();

        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.selection.slug, "transaction-patterns");
        assert_eq!(args.selection.variant.as_deref(), Some("2pc-error"));
        assert_eq!(args.interval, Some(Duration::from_millis(250)));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_bad_interval_is_rejected() {
        let result = Cli::try_parse_from(["stepview", "play", "palindrome", "--interval", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::try_parse_from(["stepview", "list", "--log-level", "debug"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.log_level, "debug");
    }
}
