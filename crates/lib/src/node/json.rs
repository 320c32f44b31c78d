//! Bridge between [`Node`] trees and `serde_json` / serde.
//!
//! JSON arrays become maps keyed `0..n`. On the way back, a non-empty map
//! whose keys are exactly `0..n` in order is written as an array and every
//! other map as an object.
//!
//! Integers keep their exact value: `i64` range as [`Scalar::Int`], anything
//! larger up to `u64::MAX` as [`Scalar::UInt`]. Only non-integers are floats.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use super::{Node, NodeMap, Scalar};

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Node::null(),
            JsonValue::Bool(b) => Node::from(b),
            JsonValue::Number(n) => number_to_node(&n),
            JsonValue::String(s) => Node::from(s),
            JsonValue::Array(items) => items.into_iter().map(Node::from).collect(),
            JsonValue::Object(fields) => Node::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect::<NodeMap>(),
            ),
        }
    }
}

fn number_to_node(n: &Number) -> Node {
    if let Some(i) = n.as_i64() {
        Node::from(i)
    } else if let Some(u) = n.as_u64() {
        Node::from(u)
    } else {
        n.as_f64().map_or_else(Node::null, Node::from)
    }
}

fn is_list_shaped(map: &NodeMap) -> bool {
    !map.is_empty() && map.is_sequential()
}

impl From<&Node> for JsonValue {
    fn from(node: &Node) -> Self {
        match node {
            Node::Leaf(Scalar::Null) => JsonValue::Null,
            Node::Leaf(Scalar::Bool(b)) => JsonValue::Bool(*b),
            Node::Leaf(Scalar::Int(n)) => JsonValue::from(*n),
            Node::Leaf(Scalar::UInt(n)) => JsonValue::from(*n),
            // NaN and infinities have no JSON form
            Node::Leaf(Scalar::Float(f)) => {
                Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number)
            }
            Node::Leaf(Scalar::Text(s)) => JsonValue::String(s.clone()),
            Node::Map(map) if is_list_shaped(map) => {
                JsonValue::Array(map.values().map(JsonValue::from).collect())
            }
            Node::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(key, value)| (key.to_string(), JsonValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for JsonValue {
    fn from(node: Node) -> Self {
        JsonValue::from(&node)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(Scalar::Null) => serializer.serialize_unit(),
            Node::Leaf(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Node::Leaf(Scalar::Int(n)) => serializer.serialize_i64(*n),
            Node::Leaf(Scalar::UInt(n)) => serializer.serialize_u64(*n),
            Node::Leaf(Scalar::Float(f)) => serializer.serialize_f64(*f),
            Node::Leaf(Scalar::Text(s)) => serializer.serialize_str(s),
            Node::Map(map) if is_list_shaped(map) => serializer.collect_seq(map.values()),
            Node::Map(map) => {
                serializer.collect_map(map.iter().map(|(key, value)| (key.to_string(), value)))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Node::from)
    }
}
