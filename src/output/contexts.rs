//! Context output formatter

use comfy_table::{presets::NOTHING, Table};
use std::collections::BTreeMap;

use super::common::{print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::context::{Context, ContextListing};

/// Output a context listing in the specified format.
///
/// Table output starts with the current-context line. For JSON/YAML that
/// line goes to stderr so stdout stays a parseable `{name: {..}}` mapping.
pub fn output_contexts(listing: &ContextListing, format: OutputFormat, detailed: bool) {
    match format {
        OutputFormat::Table => {
            println!("{}", current_context_line(&listing.current_context));
            println!("{}", render_table(listing, detailed));
        }
        OutputFormat::Json => {
            eprintln!("{}", current_context_line(&listing.current_context));
            print_json(&listing.contexts);
        }
        OutputFormat::Yaml => {
            eprintln!("{}", current_context_line(&listing.current_context));
            print_yaml(&listing.contexts);
        }
    }
}

/// Emit an empty structured object (JSON/YAML only)
pub fn output_empty(format: OutputFormat) {
    let empty: BTreeMap<String, String> = BTreeMap::new();
    match format {
        OutputFormat::Json => print_json(&empty),
        OutputFormat::Yaml => print_yaml(&empty),
        OutputFormat::Table => {}
    }
}

/// Output the resolved current context
pub fn output_current_context(name: &str, ctx: &Context, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{}", current_context_line(name));
            let mut table = Table::new();
            table.load_preset(NOTHING).set_header(vec!["KEY", "VALUE"]);
            table.add_row(vec!["server", ctx.server.as_str()]);
            table.add_row(vec!["namespace", ctx.namespace.as_str()]);
            println!("{table}");
        }
        OutputFormat::Json => print_json(ctx),
        OutputFormat::Yaml => print_yaml(ctx),
    }
}

fn current_context_line(name: &str) -> String {
    format!("\nCurrent context: {}\n", name)
}

fn render_table(listing: &ContextListing, detailed: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if detailed {
        table.set_header(vec!["CURRENT", "NAME", "SERVER", "NAMESPACE"]);
    } else {
        table.set_header(vec!["NAME", "SERVER", "NAMESPACE"]);
    }

    for (name, ctx) in &listing.contexts {
        let mut row = Vec::with_capacity(4);
        if detailed {
            row.push(if *name == listing.current_context { "*" } else { "" });
        }
        row.extend([name.as_str(), ctx.server.as_str(), ctx.namespace.as_str()]);
        table.add_row(row);
    }

    table.to_string()
}
