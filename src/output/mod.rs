//! Output formatting module
//!
//! Renders context data as table, JSON or YAML

mod common;
mod contexts;

pub use contexts::{output_contexts, output_current_context, output_empty};
