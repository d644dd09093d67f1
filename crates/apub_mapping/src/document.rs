//! Output values of the mapping layer.

use jiff::Timestamp;
use serde_json::{Map, Value};

use crate::error::{RenderError, Result};

pub const PUBLIC_COLLECTION: &str = "https://www.w3.org/ns/activitystreams#Public";

/// A rendered relation: either a reference or an embedded document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Uri(String),
    Document(Document),
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Uri(uri) => Value::String(uri),
            Node::Document(document) => document.into(),
        }
    }
}

/// JSON-LD node under construction. Keys are the wire names dictated by
/// ActivityStreams; builders consume and return `self`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new(ty: &str) -> Document {
        Document::untyped().attr("type", ty)
    }

    /// For nested values such as `endpoints` that carry no `type`.
    pub fn untyped() -> Document {
        Document(Map::new())
    }

    pub fn attr(mut self, key: &str, value: impl Into<Value>) -> Document {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Emits `key` only when `value` is present.
    pub fn attr_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Document {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// Emits `key` only when `cond` holds; `value` is not evaluated otherwise.
    pub fn attr_if<V: Into<Value>>(
        self,
        cond: bool,
        key: &str,
        value: impl FnOnce() -> V,
    ) -> Document {
        if cond { self.attr(key, value()) } else { self }
    }

    pub fn try_attr_if<V: Into<Value>>(
        self,
        cond: bool,
        key: &str,
        value: impl FnOnce() -> Result<V>,
    ) -> Result<Document> {
        if cond {
            Ok(self.attr(key, value()?))
        } else {
            Ok(self)
        }
    }

    pub fn has_one(self, key: &str, node: Node) -> Document {
        self.attr(key, node)
    }

    pub fn has_many(self, key: &str, nodes: Vec<Node>) -> Document {
        self.attr(key, Value::Array(nodes.into_iter().map(Value::from).collect()))
    }

    pub fn into_node(self) -> Node {
        Node::Document(self)
    }

    /// Puts `@context` ahead of every other key.
    pub(crate) fn with_context(self, context: Value) -> Document {
        let mut map = Map::with_capacity(self.0.len() + 1);
        map.insert("@context".to_string(), context);
        map.extend(self.0);
        Document(map)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::Object(document.0)
    }
}

/// Second precision UTC timestamp, e.g. `2024-11-04T05:12:16Z`.
pub fn iso8601(ts: Timestamp) -> String {
    ts.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Start of the UTC day containing `ts`.
pub fn midnight(ts: Timestamp) -> Result<Timestamp> {
    let seconds = ts.as_second();
    Timestamp::from_second(seconds - seconds.rem_euclid(86_400)).map_err(|error| {
        RenderError::Format {
            what: "timestamp",
            reason: error.to_string(),
        }
    })
}
