//! Config command handlers

use log::debug;

use crate::cli::{ConfigAction, CurrentArgs, ListArgs};
use crate::config::exit;
use crate::output::{output_contexts, output_current_context, output_empty};

use super::resolve::resolve_current_context;
use super::store::ContextStore;

/// Dispatch config subcommands, returning the process exit code
pub fn run_config_command(action: &ConfigAction, config_path: Option<&str>) -> u8 {
    match action {
        ConfigAction::List(args) => run_config_list(config_path, args),
        ConfigAction::Current(args) => run_config_current(config_path, args),
    }
}

/// List all contexts
fn run_config_list(config_path: Option<&str>, args: &ListArgs) -> u8 {
    if !args.args.is_empty() {
        eprintln!(
            "Too many arguments (expected 0, got {})",
            args.args.len()
        );
        return exit::USAGE;
    }

    let listing = match ContextStore::new(config_path).and_then(|store| store.list_contexts()) {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("Error listing contexts: {}", e);
            return exit::ERROR;
        }
    };
    debug!("Listing {} context(s)", listing.contexts.len());

    if listing.is_empty() {
        if args.output.is_structured() {
            output_empty(args.output);
        } else {
            eprintln!("No contexts found");
        }
        return exit::ERROR;
    }

    output_contexts(&listing, args.output, args.detailed);
    exit::SUCCESS
}

/// Show the current context details
fn run_config_current(config_path: Option<&str>, args: &CurrentArgs) -> u8 {
    let config = match ContextStore::new(config_path).and_then(|store| store.load()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading current context: {}", e);
            return exit::ERROR;
        }
    };

    let ctx = resolve_current_context(&config);
    output_current_context(&config.current_context, &ctx, args.output);
    exit::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn list_args(output: OutputFormat, args: &[&str]) -> ListArgs {
        ListArgs {
            detailed: false,
            output,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn config_file(dir: &TempDir, contents: &str) -> String {
        let path = dir.path().join(".bao");
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    const TWO_CONTEXTS: &str = r#"
current_context = "prod"
contexts "prod" {
  server    = "https://x"
  namespace = "ns1"
}
contexts "dev" {
  server = "http://localhost:8200"
}
"#;

    #[test]
    fn test_list_extra_args_is_usage_error() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir, TWO_CONTEXTS);
        let code = run_config_list(Some(path.as_str()), &list_args(OutputFormat::Table, &["x"]));
        assert_eq!(code, exit::USAGE);
    }

    #[test]
    fn test_list_success() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir, TWO_CONTEXTS);
        let code = run_config_list(Some(path.as_str()), &list_args(OutputFormat::Table, &[]));
        assert_eq!(code, exit::SUCCESS);
    }

    #[test]
    fn test_list_no_contexts_table() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir, "current_context = \"prod\"\n");
        let code = run_config_list(Some(path.as_str()), &list_args(OutputFormat::Table, &[]));
        assert_eq!(code, exit::ERROR);
    }

    #[test]
    fn test_list_no_contexts_json() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir, "");
        let code = run_config_list(Some(path.as_str()), &list_args(OutputFormat::Json, &[]));
        assert_eq!(code, exit::ERROR);
    }

    #[test]
    fn test_list_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir, "bogus_key = 1\n");
        let code = run_config_list(Some(path.as_str()), &list_args(OutputFormat::Table, &[]));
        assert_eq!(code, exit::ERROR);
    }

    #[test]
    fn test_current_unknown_context_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir, "current_context = \"missing\"\n");
        let args = CurrentArgs {
            output: OutputFormat::Json,
        };
        assert_eq!(run_config_current(Some(path.as_str()), &args), exit::SUCCESS);
    }

    #[test]
    fn test_dispatch() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir, TWO_CONTEXTS);
        let action = ConfigAction::List(list_args(OutputFormat::Yaml, &[]));
        assert_eq!(run_config_command(&action, Some(path.as_str())), exit::SUCCESS);
    }
}
