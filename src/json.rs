//! JSON projection of element trees.
//!
//! Each element becomes an object with `tagName`, `children`, then its
//! attributes at the same level, in insertion order:
//!
//! ```text
//! {"tagName":"a","children":["Home"],"href":"#"}
//! ```

use serde_json::{Map, Value};

use crate::node::{Element, Node};
use crate::raw::Raw;

/// Project `elem` and its subtree into a JSON value.
pub fn to_json(elem: &Element) -> Value {
    let mut object = Map::with_capacity(2 + elem.attributes().len());
    object.insert("tagName".into(), Value::String(elem.tag().to_string()));
    object.insert(
        "children".into(),
        Value::Array(elem.children().iter().map(node_to_json).collect()),
    );
    for attr in elem.attributes() {
        object.insert(attr.name().to_string(), Value::String(attr.value().to_string()));
    }
    Value::Object(object)
}

fn node_to_json(node: &Node) -> Value {
    match node {
        Node::Element(elem) => to_json(elem),
        Node::Text(text) => Value::String(text.clone()),
        Node::Raw(raw) => raw_to_json(raw),
    }
}

fn raw_to_json(raw: &Raw) -> Value {
    let mut object = Map::with_capacity(2);
    object.insert("type".into(), Value::String(raw.kind().as_str().to_string()));
    object.insert("content".into(), Value::String(raw.content().to_string()));
    Value::Object(object)
}

impl Element {
    /// See [`to_json`].
    pub fn to_json(&self) -> Value {
        to_json(self)
    }
}
