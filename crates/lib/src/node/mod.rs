//! The tree data model.
//!
//! Every structure the path engine touches is a [`Node`]: either an opaque
//! [`Scalar`] leaf or an ordered [`NodeMap`] of children. There is no separate
//! list type. Lists, such as parsed JSON arrays, are maps keyed `0..n`.
//!
//! # Usage
//!
//! ```
//! use keypath::node::{Node, NodeMap};
//!
//! let root = Node::from(
//!     NodeMap::new()
//!         .with("app", NodeMap::new().with("name", "demo").with("debug", false))
//!         .with("ports", Node::from_iter([8080, 8443])),
//! );
//!
//! assert_eq!(root.get_path("app.name").and_then(|l| l.as_one()), Some(&Node::from("demo")));
//! assert_eq!(root.get_path("ports.1").and_then(|l| l.as_one()), Some(&Node::from(8443)));
//! ```

use std::fmt;

use crate::dot::{self, Lookup};

mod json;
pub mod key;
pub mod map;

pub use key::Key;
pub use map::NodeMap;

/// Terminal values. Traversal never descends into a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Null value. Lookups treat it like an absent key for [`has`](crate::dot::has).
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`. Smaller unsigned values are stored as `Int`.
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::UInt(_) => "uint",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
        }
    }
}

/// A node in a configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal value
    Leaf(Scalar),
    /// Ordered children. An empty map is a value in its own right.
    Map(NodeMap),
}

impl Node {
    /// Creates a new empty map node
    pub fn map() -> Self {
        Node::Map(NodeMap::new())
    }

    /// Creates a null leaf
    pub fn null() -> Self {
        Node::Leaf(Scalar::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns true for a map with no children
    pub fn is_empty_map(&self) -> bool {
        matches!(self, Node::Map(map) if map.is_empty())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Leaf(Scalar::Null))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Leaf(scalar) => scalar.type_name(),
            Node::Map(_) => "map",
        }
    }

    pub fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Node::Map(map) => Some(map),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut NodeMap> {
        match self {
            Node::Map(map) => Some(map),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf(scalar) => Some(scalar),
            Node::Map(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Leaf(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Leaf(Scalar::Int(n)) => Some(*n),
            Node::Leaf(Scalar::UInt(n)) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns the value as an unsigned integer, if it is a non-negative integer
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Node::Leaf(Scalar::Int(n)) => u64::try_from(*n).ok(),
            Node::Leaf(Scalar::UInt(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Leaf(Scalar::Float(n)) => Some(*n),
            Node::Leaf(Scalar::Int(n)) => Some(*n as f64),
            Node::Leaf(Scalar::UInt(n)) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Leaf(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the map inside this node, replacing a leaf with an empty map first.
    pub fn ensure_map(&mut self) -> &mut NodeMap {
        match self {
            Node::Map(map) => map,
            Node::Leaf(scalar) => {
                tracing::trace!(replaced = scalar.type_name(), "overwriting leaf with map");
                *self = Node::map();
                self.ensure_map()
            }
        }
    }

    /// Looks up a dotted path. See [`dot::get`].
    pub fn get_path(&self, path: impl AsRef<str>) -> Option<Lookup<'_>> {
        dot::get(self, path)
    }

    /// Checks a dotted path. See [`dot::has`].
    pub fn has_path(&self, path: impl AsRef<str>) -> bool {
        dot::has(self, path)
    }

    /// Writes a dotted path. See [`dot::set`].
    pub fn set_path(&mut self, path: impl AsRef<str>, value: impl Into<Node>) -> &mut Self {
        dot::set(self, path, value);
        self
    }

    /// Deletes a dotted path. See [`dot::forget`].
    pub fn forget_path(&mut self, path: impl AsRef<str>) -> usize {
        dot::forget(self, path)
    }

    /// Converts to compact JSON text
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self).to_string()
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::map()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}

// Convenient From implementations for common types
impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Leaf(value)
    }
}

impl From<NodeMap> for Node {
    fn from(value: NodeMap) -> Self {
        Node::Map(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Leaf(Scalar::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Leaf(Scalar::Int(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Leaf(Scalar::Int(value as i64))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Leaf(Scalar::Int(value as i64))
    }
}

/// Values that fit in `i64` are stored as [`Scalar::Int`].
impl From<u64> for Node {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Node::Leaf(Scalar::Int(n)),
            Err(_) => Node::Leaf(Scalar::UInt(value)),
        }
    }
}

impl From<usize> for Node {
    fn from(value: usize) -> Self {
        Node::from(value as u64)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Leaf(Scalar::Float(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Leaf(Scalar::Text(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Leaf(Scalar::Text(value.to_string()))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Node::null, Into::into)
    }
}

/// Builds a list-shaped map keyed `0..n`.
impl<V: Into<Node>> FromIterator<V> for Node {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Node::Map(iter.into_iter().enumerate().collect())
    }
}

// PartialEq implementations for comparing Node with scalars
impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<u64> for Node {
    fn eq(&self, other: &u64) -> bool {
        self.as_uint() == Some(*other)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
