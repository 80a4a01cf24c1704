//! CLI argument parsing

mod common;
mod context;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use context::{ConfigAction, CurrentArgs, ListArgs};

/// Inspect bao CLI configuration contexts
#[derive(Parser, Debug)]
#[command(name = "baoctx")]
#[command(version)]
#[command(about = "Inspect bao CLI configuration contexts", long_about = None)]
pub struct Cli {
    /// Path to the CLI config file (overrides BAO_CONFIG_PATH and ~/.bao)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interact with config contexts
    #[command(arg_required_else_help = true)]
    #[command(after_help = "EXAMPLES:\n  \
        baoctx config list\n  \
        baoctx config current")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["baoctx", "config", "list"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.config.is_none());
        let Command::Config {
            action: ConfigAction::List(args),
        } = cli.command
        else {
            panic!("Expected config list");
        };
        assert!(!args.detailed);
        assert!(args.args.is_empty());
    }

    #[test]
    fn test_cli_list_detailed_json() {
        let cli = Cli::parse_from(["baoctx", "config", "list", "--detailed", "-o", "json"]);
        let Command::Config {
            action: ConfigAction::List(args),
        } = cli.command
        else {
            panic!("Expected config list");
        };
        assert!(args.detailed);
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_global_config_after_subcommand() {
        let cli = Cli::parse_from(["baoctx", "config", "list", "--config", "/tmp/bao.hcl"]);
        assert_eq!(cli.config.as_deref(), Some("/tmp/bao.hcl"));
    }

    #[test]
    fn test_cli_list_collects_extra_args() {
        let cli = Cli::parse_from(["baoctx", "config", "list", "foo", "bar"]);
        let Command::Config {
            action: ConfigAction::List(args),
        } = cli.command
        else {
            panic!("Expected config list");
        };
        assert_eq!(args.args, vec!["foo", "bar"]);
    }

    #[test]
    fn test_cli_config_requires_subcommand() {
        assert!(Cli::try_parse_from(["baoctx", "config"]).is_err());
    }

    #[test]
    fn test_cli_invalid_format() {
        assert!(Cli::try_parse_from(["baoctx", "config", "list", "-o", "csv"]).is_err());
    }

    #[test]
    fn test_cli_current() {
        let cli = Cli::parse_from(["baoctx", "-l", "debug", "config", "current", "-o", "yaml"]);
        assert_eq!(cli.log_level, "debug");
        let Command::Config {
            action: ConfigAction::Current(args),
        } = cli.command
        else {
            panic!("Expected config current");
        };
        assert_eq!(args.output, OutputFormat::Yaml);
    }
}
