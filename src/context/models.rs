//! Configuration data models

use serde::Serialize;
use std::collections::BTreeMap;

/// Decoded CLI configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// External program used to store and retrieve the auth token
    pub token_helper: String,
    /// Name of the active entry in `contexts`; not checked against it
    pub current_context: String,
    /// Map of context name to context configuration
    pub contexts: BTreeMap<String, Context>,
}

/// A named server endpoint and namespace pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    /// Server address
    pub server: String,
    /// Namespace, opaque to this crate
    pub namespace: String,
}

impl Context {
    /// True for the value returned when the current context does not resolve
    pub fn is_empty(&self) -> bool {
        self.server.is_empty() && self.namespace.is_empty()
    }
}

/// Display record for one entry of a context listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextDisplay {
    pub namespace: String,
    pub server: String,
}

impl From<&Context> for ContextDisplay {
    fn from(ctx: &Context) -> Self {
        Self {
            namespace: ctx.namespace.clone(),
            server: ctx.server.clone(),
        }
    }
}
