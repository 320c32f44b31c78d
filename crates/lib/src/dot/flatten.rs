//! Flattening between nested trees and dotted entries.

use indexmap::IndexMap;

use super::write::set;
use crate::{
    node::{Node, NodeMap},
    path::join_prefix,
};

/// Dotted path to terminal value, in depth-first map order.
pub type Flattened<'a> = IndexMap<String, &'a Node>;

/// Flattens a tree into dotted paths.
///
/// Non-empty maps are descended into. Leaves and empty maps are terminal and
/// each produce one entry. `prefix` is prepended to every path (joined with a
/// `.`) unless it is empty. A leaf root flattens to nothing.
///
/// # Examples
///
/// ```
/// # use keypath::{dot, node::Node};
/// # use serde_json::json;
/// let root = Node::from(json!({"cache": [], "config": {"paths": []}, "ports": [80, 443]}));
/// let flat = dot::flatten(&root, "");
///
/// let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["cache", "config.paths", "ports.0", "ports.1"]);
/// assert!(flat["cache"].is_empty_map());
/// ```
pub fn flatten<'a>(root: &'a Node, prefix: &str) -> Flattened<'a> {
    let mut out = IndexMap::new();
    if let Node::Map(map) = root {
        flatten_into(map, prefix, &mut out);
    }
    out
}

fn flatten_into<'a>(map: &'a NodeMap, prefix: &str, out: &mut Flattened<'a>) {
    for (key, child) in map.iter() {
        let path = join_prefix(prefix, key);
        match child {
            Node::Map(inner) if !inner.is_empty() => flatten_into(inner, &path, out),
            _ => {
                out.insert(path, child);
            }
        }
    }
}

/// The dotted paths of [`flatten`], in order.
pub fn keys(root: &Node) -> Vec<String> {
    flatten(root, "").into_keys().collect()
}

/// The terminal values of [`flatten`], in order.
pub fn values(root: &Node) -> Vec<&Node> {
    flatten(root, "").into_values().collect()
}

/// Rebuilds a tree from dotted entries by calling [`set`] for each in order.
///
/// This inverts [`flatten`] for trees whose keys contain no `.`.
///
/// # Examples
///
/// ```
/// # use keypath::{dot, node::Node};
/// # use serde_json::json;
/// let root = dot::expand([("app.name", Node::from("demo")), ("app.ports.0", Node::from(80))]);
/// assert_eq!(root, Node::from(json!({"app": {"name": "demo", "ports": [80]}})));
/// ```
pub fn expand<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Node
where
    K: AsRef<str>,
    V: Into<Node>,
{
    let mut root = Node::map();
    for (path, value) in entries {
        set(&mut root, path, value);
    }
    root
}
