//! Current-context and listing views over a loaded configuration

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;

use super::models::{Configuration, Context, ContextDisplay};
use super::store::ContextStore;

/// All contexts keyed by name, plus the configured current-context name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextListing {
    pub contexts: BTreeMap<String, ContextDisplay>,
    pub current_context: String,
}

impl ContextListing {
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

/// Look up `current_context` in `contexts`.
///
/// An empty or unknown name resolves to `Context::default()` rather than an
/// error.
pub fn resolve_current_context(config: &Configuration) -> Context {
    match config.contexts.get(&config.current_context) {
        Some(ctx) => {
            debug!(
                "Resolved context '{}': server={}",
                config.current_context, ctx.server
            );
            ctx.clone()
        }
        None => {
            debug!(
                "Context '{}' not found in config, using empty context",
                config.current_context
            );
            Context::default()
        }
    }
}

/// Build the display listing of every context
pub fn list_contexts(config: &Configuration) -> ContextListing {
    ContextListing {
        contexts: config
            .contexts
            .iter()
            .map(|(name, ctx)| (name.clone(), ContextDisplay::from(ctx)))
            .collect(),
        current_context: config.current_context.clone(),
    }
}

impl ContextStore {
    /// Load the file and resolve the current context
    pub fn current_context(&self) -> Result<Context> {
        let config = self.load()?;
        Ok(resolve_current_context(&config))
    }

    /// Load the file and list its contexts
    pub fn list_contexts(&self) -> Result<ContextListing> {
        let config = self.load()?;
        Ok(list_contexts(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_with(current: &str, names: &[(&str, &str, &str)]) -> Configuration {
        let mut config = Configuration {
            current_context: current.to_string(),
            ..Default::default()
        };
        for (name, server, namespace) in names {
            config.contexts.insert(
                name.to_string(),
                Context {
                    server: server.to_string(),
                    namespace: namespace.to_string(),
                },
            );
        }
        config
    }

    #[test]
    fn test_current_context_found() {
        let config = config_with("prod", &[("prod", "https://x", "ns1"), ("dev", "http://d", "")]);
        let ctx = resolve_current_context(&config);
        assert_eq!(ctx.server, "https://x");
        assert_eq!(ctx.namespace, "ns1");
    }

    #[test]
    fn test_current_context_unknown_name_is_zero_value() {
        let config = config_with("staging", &[("prod", "https://x", "ns1")]);
        assert_eq!(resolve_current_context(&config), Context::default());
    }

    #[test]
    fn test_current_context_empty_name_is_zero_value() {
        let config = config_with("", &[("prod", "https://x", "ns1")]);
        assert!(resolve_current_context(&config).is_empty());
    }

    #[test]
    fn test_list_contexts() {
        let config = config_with("dev", &[("prod", "https://x", "ns1"), ("dev", "http://d", "")]);
        let listing = list_contexts(&config);
        assert_eq!(listing.current_context, "dev");
        assert_eq!(listing.contexts.len(), 2);
        assert_eq!(
            listing.contexts["prod"],
            ContextDisplay {
                namespace: "ns1".to_string(),
                server: "https://x".to_string(),
            }
        );
    }

    #[test]
    fn test_list_contexts_empty_keeps_current_name() {
        let config = config_with("orphan", &[]);
        let listing = list_contexts(&config);
        assert!(listing.is_empty());
        assert_eq!(listing.current_context, "orphan");
    }

    #[test]
    fn test_listing_json_shape() {
        let config = config_with("prod", &[("prod", "https://x", "ns1")]);
        let json = serde_json::to_value(list_contexts(&config).contexts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"prod": {"namespace": "ns1", "server": "https://x"}})
        );
    }

    #[test]
    fn test_store_current_context_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".bao");
        fs::write(
            &path,
            "current_context = \"prod\"\ncontexts {\n  prod {\n    server = \"https://x\"\n    namespace = \"ns1\"\n  }\n}\n",
        )
        .unwrap();
        let store = ContextStore::with_path(path);
        let ctx = store.current_context().unwrap();
        assert_eq!(
            ctx,
            Context {
                server: "https://x".to_string(),
                namespace: "ns1".to_string(),
            }
        );
    }

    #[test]
    fn test_store_missing_file_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let store = ContextStore::with_path(dir.path().join(".bao"));
        let listing = store.list_contexts().unwrap();
        assert!(listing.is_empty());
        assert!(listing.current_context.is_empty());
        assert!(store.current_context().unwrap().is_empty());
    }

    #[test]
    fn test_store_propagates_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".bao");
        fs::write(&path, "bogus_key = 1\n").unwrap();
        let store = ContextStore::with_path(path);
        assert!(store.current_context().is_err());
        assert!(store.list_contexts().is_err());
    }
}
