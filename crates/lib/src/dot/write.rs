//! Path writes: `set` and `forget`.

use crate::{
    node::{Node, NodeMap},
    path::{KeyPath, Segment},
};

/// Sets `value` at `path`, creating intermediate maps as needed.
///
/// Every segment but the last must address a map. A leaf found in such a
/// position, including a leaf root, is replaced by an empty map
/// (last writer wins, nothing is merged). The last segment is inserted or
/// overwritten. The empty path is a no-op.
///
/// Writes never fan out: a `*` segment is the literal key `"*"` here.
///
/// # Examples
///
/// ```
/// # use keypath::{dot, node::Node};
/// # use serde_json::json;
/// let mut root = Node::from(json!({"app": "wrong"}));
/// dot::set(&mut root, "app.config.env", "local");
/// assert_eq!(root, Node::from(json!({"app": {"config": {"env": "local"}}})));
/// ```
pub fn set(root: &mut Node, path: impl AsRef<str>, value: impl Into<Node>) {
    let path = KeyPath::parse(path.as_ref());
    if path.is_empty() {
        return;
    }
    let Some((last, parents)) = path.segments().split_last() else {
        return;
    };

    let mut current = root;
    for segment in parents {
        current = current.ensure_map().entry_or_map(segment.to_key());
    }
    if let Some(old) = current.ensure_map().insert(last.to_key(), value) {
        tracing::trace!(path = %path, replaced = old.type_name(), "overwrote value");
    }
}

/// Deletes `path` in place and returns the number of entries removed.
///
/// Deletion is asymmetric to [`get`](super::get):
///
/// - A literal last segment removes its key outright, even when the value is
///   a whole branch.
/// - A literal segment that is missing, or that holds a non-map while
///   segments remain, stops the walk without touching anything.
/// - A wildcard recurses into every map child with the remaining segments
///   but never removes the child key itself. When the wildcard is the last
///   segment, every non-map child at that level is removed.
///
/// # Examples
///
/// ```
/// # use keypath::{dot, node::Node};
/// # use serde_json::json;
/// let original = Node::from(json!({"db": {"mysql": {"port": 1}, "pgsql": {"port": 2}}}));
///
/// let mut root = original.clone();
/// assert_eq!(dot::forget(&mut root, "db.*.port"), 2);
/// assert_eq!(root, Node::from(json!({"db": {"mysql": {}, "pgsql": {}}})));
///
/// let mut root = original.clone();
/// dot::forget(&mut root, "db.mysql");
/// assert_eq!(root, Node::from(json!({"db": {"pgsql": {"port": 2}}})));
/// ```
pub fn forget(root: &mut Node, path: impl AsRef<str>) -> usize {
    let path = KeyPath::parse(path.as_ref());
    if path.is_empty() {
        return 0;
    }
    let removed = match root {
        Node::Map(map) => forget_in(map, path.segments()),
        Node::Leaf(_) => 0,
    };
    tracing::trace!(path = %path, removed, "forget");
    removed
}

fn forget_in(map: &mut NodeMap, segments: &[Segment]) -> usize {
    let Some((first, rest)) = segments.split_first() else {
        return 0;
    };

    match first {
        Segment::Literal(key) if rest.is_empty() => usize::from(map.remove(key).is_some()),
        Segment::Literal(key) => match map.get_mut(key) {
            Some(Node::Map(child)) => forget_in(child, rest),
            _ => 0,
        },
        Segment::Wildcard if rest.is_empty() => {
            let before = map.len();
            map.retain(|_, child| child.is_map());
            before - map.len()
        }
        Segment::Wildcard => map
            .values_mut()
            .filter_map(Node::as_map_mut)
            .map(|child| forget_in(child, rest))
            .sum(),
    }
}
