//! baoctx - Main entry point

use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use baoctx::config::exit;
use baoctx::{run_config_command, Cli, Command};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // a failed write to a closed stdout/stderr has nowhere to be reported
            e.print().ok();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(exit::SUCCESS),
                _ => ExitCode::from(exit::USAGE),
            };
        }
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting baoctx v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: config={:?}, command={:?}", cli.config, cli.command);

    let code = match &cli.command {
        Command::Config { action } => run_config_command(action, cli.config.as_deref()),
    };

    debug!("Exiting with code {}", code);
    ExitCode::from(code)
}
