//! Context configuration module
//!
//! Locates, reads and decodes the CLI configuration file (token helper,
//! named server/namespace contexts, current-context name) and derives the
//! current-context and listing views used by the `config` commands.

mod ast;
mod commands;
mod models;
mod parse;
mod path;
mod resolve;
mod store;

pub use ast::{parse_document, Node, ObjectItem, ObjectList};
pub use commands::run_config_command;
pub use models::{Configuration, Context, ContextDisplay};
pub use parse::parse_config;
pub use path::{expand_home, resolve_config_path, resolve_config_path_with};
pub use resolve::{list_contexts, resolve_current_context, ContextListing};
pub use store::{load_config, read_config_file, ContextStore};
