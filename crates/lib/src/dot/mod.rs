//! Dot-notation access to [`Node`] trees.
//!
//! This module is the path engine. It reads, writes, deletes, and enumerates
//! values inside a nested [`Node`] using dotted path strings such as
//! `"db.connections.mysql.port"`. A `*` segment matches every child of a map
//! at that position.
//!
//! # Operations
//!
//! - [`set`] writes a value, creating intermediate maps as needed
//! - [`get`] reads a value, or every wildcard match as a list
//! - [`has`] checks for a present, non-empty value
//! - [`forget`] deletes in place (with its own wildcard semantics)
//! - [`flatten`], [`keys`], [`values`] enumerate terminal values by dotted path
//! - [`expand`] rebuilds a tree from dotted entries
//! - [`try_get`] is the strict variant of [`get`]
//!
//! The permissive operations never fail. A missing key or a value of the
//! wrong shape reads as "not found", and under a wildcard it is skipped.
//!
//! # Usage
//!
//! ```
//! use keypath::{dot, node::Node};
//! use serde_json::json;
//!
//! let mut root = Node::from(json!({
//!     "db": {
//!         "mysql": { "host": "127.0.0.1", "port": 3306 },
//!         "pgsql": { "host": "0.0.0.0", "port": 5432 },
//!     }
//! }));
//!
//! let ports = dot::get(&root, "db.*.port").unwrap();
//! assert_eq!(ports.into_vec(), vec![&Node::from(3306), &Node::from(5432)]);
//!
//! dot::set(&mut root, "db.mysql.port", 3307);
//! assert!(dot::has(&root, "db.mysql.port"));
//!
//! dot::forget(&mut root, "db.*.host");
//! assert_eq!(dot::keys(&root), vec!["db.mysql.port", "db.pgsql.port"]);
//! ```

use crate::node::Node;

pub mod errors;
mod flatten;
mod read;
mod write;

pub use errors::LookupError;
pub use flatten::{Flattened, expand, flatten, keys, values};
pub use read::{get, has, try_get};
pub use write::{forget, set};

/// The result of a successful [`get`].
///
/// A purely literal path yields [`Lookup::One`]. A path containing a wildcard
/// yields [`Lookup::Many`], which may be empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    /// The node at a literal path, returned as-is
    One(&'a Node),
    /// Every wildcard match, in map iteration order
    Many(Vec<&'a Node>),
}

impl<'a> Lookup<'a> {
    /// Whether this result counts as present for [`has`].
    ///
    /// A single node is present unless it is an empty map or a null leaf. A
    /// match list is present when it is non-empty.
    pub fn is_present(&self) -> bool {
        match self {
            Lookup::One(node) => !(node.is_empty_map() || node.is_null()),
            Lookup::Many(nodes) => !nodes.is_empty(),
        }
    }

    pub fn as_one(&self) -> Option<&'a Node> {
        match self {
            Lookup::One(node) => Some(node),
            Lookup::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[&'a Node]> {
        match self {
            Lookup::Many(nodes) => Some(nodes),
            Lookup::One(_) => None,
        }
    }

    /// Number of matched nodes; always 1 for [`Lookup::One`]
    pub fn len(&self) -> usize {
        match self {
            Lookup::One(_) => 1,
            Lookup::Many(nodes) => nodes.len(),
        }
    }

    /// Returns true for an empty match list
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts into a list, wrapping a single node.
    pub fn into_vec(self) -> Vec<&'a Node> {
        match self {
            Lookup::One(node) => vec![node],
            Lookup::Many(nodes) => nodes,
        }
    }

    /// Clones the result into an owned node. A match list becomes a map keyed `0..n`.
    pub fn to_node(&self) -> Node {
        match self {
            Lookup::One(node) => (*node).clone(),
            Lookup::Many(nodes) => nodes.iter().map(|node| (*node).clone()).collect(),
        }
    }
}
