//! Configuration text parsing, key validation and typed decoding

use log::debug;
use std::collections::BTreeMap;

use crate::config::keys;
use crate::error::{ConfigError, Result};

use super::ast::{self, Node, ObjectList};
use super::models::{Configuration, Context};

/// Parse configuration text (HCL or JSON) into a [`Configuration`].
///
/// Empty text yields an empty configuration. Top-level keys are checked
/// against the allow-list before anything is decoded, so one unexpected key
/// rejects the whole document.
pub fn parse_config(contents: &str) -> Result<Configuration> {
    let Node::Object(list) = ast::parse_document(contents)? else {
        return Err(ConfigError::Malformed);
    };

    check_keys(&list, keys::VALID)?;

    let config = decode_configuration(&list)?;
    debug!(
        "Decoded config: {} context(s), current_context={:?}",
        config.contexts.len(),
        config.current_context
    );
    Ok(config)
}

/// Reject the first key not present in `valid`
fn check_keys(list: &ObjectList, valid: &[&str]) -> Result<()> {
    match list.keys().find(|key| !valid.contains(key)) {
        Some(key) => Err(ConfigError::UnknownKey {
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}

fn decode_configuration(list: &ObjectList) -> Result<Configuration> {
    let mut config = Configuration::default();
    for item in &list.items {
        match item.key.as_str() {
            keys::TOKEN_HELPER => config.token_helper = decode_string(&item.key, &item.value)?,
            keys::CURRENT_CONTEXT => {
                config.current_context = decode_string(&item.key, &item.value)?
            }
            keys::CONTEXTS => decode_contexts(&item.value, &mut config.contexts)?,
            other => {
                return Err(ConfigError::UnknownKey {
                    key: other.to_string(),
                })
            }
        }
    }
    Ok(config)
}

/// Decode a `contexts` value into `into`. Repeated definitions merge field by
/// field: a later block only overwrites the fields it sets.
fn decode_contexts(value: &Node, into: &mut BTreeMap<String, Context>) -> Result<()> {
    match value {
        Node::Object(list) => {
            for item in &list.items {
                let ctx = into.entry(item.key.clone()).or_default();
                decode_context(&item.key, &item.value, ctx)?;
            }
            Ok(())
        }
        Node::List(nodes) => nodes
            .iter()
            .try_for_each(|node| decode_contexts(node, into)),
        other => Err(ConfigError::Decode {
            key: keys::CONTEXTS.to_string(),
            message: format!("expected an object, got {}", other.kind()),
        }),
    }
}

/// Decode one context block onto `ctx`, leaving fields it does not set
fn decode_context(name: &str, value: &Node, ctx: &mut Context) -> Result<()> {
    let path = format!("{}.{}", keys::CONTEXTS, name);
    let Node::Object(list) = value else {
        return Err(ConfigError::Decode {
            key: path,
            message: format!("expected an object, got {}", value.kind()),
        });
    };

    for item in &list.items {
        match item.key.as_str() {
            keys::SERVER => {
                ctx.server = decode_string(&format!("{}.{}", path, item.key), &item.value)?
            }
            keys::NAMESPACE => {
                ctx.namespace = decode_string(&format!("{}.{}", path, item.key), &item.value)?
            }
            other => debug!("Ignoring unknown key {}.{}", path, other),
        }
    }
    Ok(())
}

fn decode_string(key: &str, value: &Node) -> Result<String> {
    match value {
        Node::String(s) => Ok(s.clone()),
        Node::Number(n) => Ok(n.clone()),
        other => Err(ConfigError::Decode {
            key: key.to_string(),
            message: format!("expected a string, got {}", other.kind()),
        }),
    }
}
