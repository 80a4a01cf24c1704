//! Generic object-list tree built from HCL or JSON text
//!
//! Both syntaxes are reduced to the same shape before any key validation or
//! typed decoding happens. HCL blocks with labels become nested objects, so
//! `contexts "prod" { ... }`, `contexts { prod { ... } }` and
//! `contexts = { prod = { ... } }` all produce the same tree.

use hcl::expr::{Expression, ObjectKey, TemplateExpr};
use hcl::structure::{Block, Body, Structure};
use log::debug;

use crate::error::{ConfigError, Result};

/// A parsed value
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    /// Numbers keep their textual form
    Number(String),
    String(String),
    List(Vec<Node>),
    Object(ObjectList),
    /// HCL expression without a literal value (variable, call, operation...)
    Expr,
}

impl Node {
    /// Human-readable name of the node type, used in decode errors
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::List(_) => "list",
            Node::Object(_) => "object",
            Node::Expr => "expression",
        }
    }
}

/// One `key = value` or `key { ... }` entry
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectItem {
    pub key: String,
    pub value: Node,
}

/// Ordered sequence of items; keys may repeat
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectList {
    pub items: Vec<ObjectItem>,
}

impl ObjectList {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parse raw text into a tree. Text starting with `{` or `[` is JSON,
/// everything else is HCL. Empty text yields an empty object list.
pub fn parse_document(contents: &str) -> Result<Node> {
    let trimmed = contents.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        debug!("Parsing config as JSON");
        let value: serde_json::Value = serde_json::from_str(contents)?;
        return Ok(Node::from(value));
    }

    debug!("Parsing config as HCL");
    let body: Body = hcl::parse(contents)?;
    Ok(Node::Object(body_to_list(body)?))
}

fn body_to_list(body: Body) -> Result<ObjectList> {
    let items = body
        .into_iter()
        .map(|structure| match structure {
            Structure::Attribute(attr) => Ok(ObjectItem {
                key: attr.key.to_string(),
                value: expression_to_node(attr.expr)?,
            }),
            Structure::Block(block) => block_to_item(block),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ObjectList { items })
}

fn block_to_item(block: Block) -> Result<ObjectItem> {
    let mut value = Node::Object(body_to_list(block.body)?);
    for label in block.labels.into_iter().rev() {
        value = Node::Object(ObjectList {
            items: vec![ObjectItem {
                key: label.as_str().to_string(),
                value,
            }],
        });
    }
    Ok(ObjectItem {
        key: block.identifier.to_string(),
        value,
    })
}

fn expression_to_node(expr: Expression) -> Result<Node> {
    let node = match expr {
        Expression::Null => Node::Null,
        Expression::Bool(b) => Node::Bool(b),
        Expression::Number(n) => Node::Number(n.to_string()),
        Expression::String(s) => Node::String(s),
        Expression::Array(values) => Node::List(
            values
                .into_iter()
                .map(expression_to_node)
                .collect::<Result<Vec<_>>>()?,
        ),
        Expression::Object(object) => {
            let items = object
                .into_iter()
                .map(|(key, value)| {
                    Ok(ObjectItem {
                        key: object_key_to_string(key)?,
                        value: expression_to_node(value)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Node::Object(ObjectList { items })
        }
        // Interpolations are not evaluated; the template text is the value
        Expression::TemplateExpr(template) => match *template {
            TemplateExpr::QuotedString(s) => Node::String(s),
            TemplateExpr::Heredoc(heredoc) => Node::String(heredoc.template),
        },
        _ => Node::Expr,
    };
    Ok(node)
}

fn object_key_to_string(key: ObjectKey) -> Result<String> {
    match key {
        ObjectKey::Identifier(ident) => Ok(ident.to_string()),
        ObjectKey::Expression(Expression::String(s)) => Ok(s),
        ObjectKey::Expression(Expression::Number(n)) => Ok(n.to_string()),
        _ => Err(ConfigError::Syntax(
            "object keys must be identifiers or literal strings".to_string(),
        )),
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => Node::Number(n.to_string()),
            serde_json::Value::String(s) => Node::String(s),
            serde_json::Value::Array(values) => {
                Node::List(values.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(map) => Node::Object(ObjectList {
                items: map
                    .into_iter()
                    .map(|(key, value)| ObjectItem {
                        key,
                        value: Node::from(value),
                    })
                    .collect(),
            }),
        }
    }
}
