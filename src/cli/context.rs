//! Config command group arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::config::defaults;

/// Config subcommands for inspecting connection contexts
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List contexts available
    List(ListArgs),

    /// Display the server and namespace of the current context
    Current(CurrentArgs),
}

/// Arguments for 'config list' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        baoctx config list\n  \
        baoctx config list --detailed\n  \
        baoctx config list -o json")]
pub struct ListArgs {
    /// Print detailed information such as the current-context marker
    #[arg(long, default_value_t = false)]
    pub detailed: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, env = defaults::FORMAT_ENV_VAR)]
    pub output: OutputFormat,

    /// Unexpected positional arguments, reported as a usage error
    #[arg(hide = true)]
    pub args: Vec<String>,
}

/// Arguments for 'config current' subcommand
#[derive(Parser, Debug)]
pub struct CurrentArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, env = defaults::FORMAT_ENV_VAR)]
    pub output: OutputFormat,
}
