//! baoctx - Inspect bao CLI configuration contexts
//!
//! Loads the CLI configuration file (`~/.bao` or `$BAO_CONFIG_PATH`), an HCL
//! or JSON document holding a token helper, named contexts and the name of
//! the current context.
//!
//! # Features
//!
//! - Tolerant loading: a missing file is an empty configuration
//! - Strict top-level key validation
//! - Current-context resolution and context listing
//! - Multiple output formats (table, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # List all contexts
//! baoctx config list
//!
//! # Mark the current context in the table
//! baoctx config list --detailed
//!
//! # Output as JSON from a specific file
//! baoctx --config ./bao.hcl config list -o json
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod output;

pub use cli::{Cli, Command, ConfigAction, OutputFormat};
pub use context::{
    list_contexts, load_config, parse_config, resolve_current_context, run_config_command,
    Configuration, Context, ContextDisplay, ContextListing, ContextStore,
};
pub use error::{ConfigError, Result};
