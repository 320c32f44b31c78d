//! Path reads: `get`, `has`, and the strict `try_get`.
//!
//! One traversal serves both modes. In permissive mode a failed branch
//! yields `None` (or contributes nothing under a wildcard). In strict mode the
//! same failure is reported as a [`LookupError`].

use super::{Lookup, LookupError};
use crate::{
    node::{Key, Node},
    path::{KeyPath, Segment},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Permissive,
    Strict,
}

/// Gets the value at `path`.
///
/// Returns `None` when a literal segment is missing or meets a non-map, and
/// for the empty path. A path containing a wildcard returns
/// [`Lookup::Many`] with every match in map iteration order, or an empty list
/// when nothing matches.
///
/// Under a wildcard, children that cannot be descended into are skipped.
/// When the wildcard is followed by more segments, a nested match list is
/// spliced into the outer one; a single match is appended as one element,
/// even if it is a map.
///
/// # Examples
///
/// ```
/// # use keypath::{dot::{self, Lookup}, node::Node};
/// # use serde_json::json;
/// let root = Node::from(json!({"a": {"x": {"p": 1}, "y": {"p": 2}}}));
///
/// let leaves = dot::get(&root, "a.*.*").unwrap();
/// assert_eq!(leaves.to_node(), Node::from(json!([1, 2])));
///
/// let branches = dot::get(&root, "a.*").unwrap();
/// assert_eq!(branches.to_node(), Node::from(json!([{"p": 1}, {"p": 2}])));
///
/// assert_eq!(dot::get(&root, "a.*.missing"), Some(Lookup::Many(vec![])));
/// assert_eq!(dot::get(&root, "b.*"), None);
/// ```
pub fn get(root: &Node, path: impl AsRef<str>) -> Option<Lookup<'_>> {
    let path = KeyPath::parse(path.as_ref());
    if path.is_empty() {
        return None;
    }
    // Permissive mode never produces an error
    walk(root, path.segments(), Mode::Permissive, &mut Vec::new()).unwrap_or(None)
}

/// Returns true iff [`get`] finds a value that is neither an empty map nor null.
///
/// A key holding an empty map reads as absent. This keeps parity with the
/// loose "is it set" check configuration code relies on.
pub fn has(root: &Node, path: impl AsRef<str>) -> bool {
    get(root, path).is_some_and(|lookup| lookup.is_present())
}

/// Strict variant of [`get`].
///
/// Same traversal and result shape, but any branch that would be skipped or
/// read as missing is an error instead, including non-map children under a
/// wildcard that still has segments to consume.
pub fn try_get(root: &Node, path: impl AsRef<str>) -> Result<Lookup<'_>, LookupError> {
    let path = KeyPath::parse(path.as_ref());
    if path.is_empty() {
        return Err(LookupError::EmptyPath);
    }
    // Strict mode reports every miss as an error, so `None` does not occur
    walk(root, path.segments(), Mode::Strict, &mut Vec::new())
        .map(|found| found.unwrap_or(Lookup::Many(Vec::new())))
}

fn walk<'a: 'b, 'b>(
    node: &'a Node,
    segments: &'b [Segment],
    mode: Mode,
    trail: &mut Vec<&'b Key>,
) -> Result<Option<Lookup<'a>>, LookupError> {
    let depth = trail.len();
    let found = walk_segments(node, segments, mode, trail);
    trail.truncate(depth);
    found
}

fn walk_segments<'a: 'b, 'b>(
    node: &'a Node,
    segments: &'b [Segment],
    mode: Mode,
    trail: &mut Vec<&'b Key>,
) -> Result<Option<Lookup<'a>>, LookupError> {
    let mut current = node;
    for (i, segment) in segments.iter().enumerate() {
        let key = match segment {
            Segment::Literal(key) => key,
            Segment::Wildcard => {
                let matches = expand_wildcard(current, &segments[i + 1..], mode, trail)?;
                return Ok(Some(Lookup::Many(matches)));
            }
        };

        let Node::Map(map) = current else {
            return miss(mode, || LookupError::NotAMap {
                path: render(trail.as_slice()),
                found: current.type_name(),
            });
        };
        match map.get(key) {
            Some(child) => {
                trail.push(key);
                current = child;
            }
            None => {
                return miss(mode, || LookupError::MissingKey {
                    path: render(trail.as_slice()),
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(Some(Lookup::One(current)))
}

fn expand_wildcard<'a: 'b, 'b>(
    node: &'a Node,
    rest: &'b [Segment],
    mode: Mode,
    trail: &mut Vec<&'b Key>,
) -> Result<Vec<&'a Node>, LookupError> {
    let Node::Map(map) = node else {
        return match mode {
            Mode::Permissive => Ok(Vec::new()),
            Mode::Strict => Err(LookupError::NotAMap {
                path: render(trail),
                found: node.type_name(),
            }),
        };
    };

    let mut matches = Vec::new();
    for (key, child) in map.iter() {
        if rest.is_empty() {
            matches.push(child);
            continue;
        }

        trail.push(key);
        if !child.is_map() {
            if mode == Mode::Strict {
                return Err(LookupError::NotAMap {
                    path: render(trail),
                    found: child.type_name(),
                });
            }
            trail.pop();
            continue;
        }

        let found = walk(child, rest, mode, trail)?;
        trail.pop();
        match found {
            Some(Lookup::One(node)) => matches.push(node),
            Some(Lookup::Many(nodes)) => matches.extend(nodes),
            None => {}
        }
    }
    Ok(matches)
}

fn miss<'a>(
    mode: Mode,
    error: impl FnOnce() -> LookupError,
) -> Result<Option<Lookup<'a>>, LookupError> {
    match mode {
        Mode::Permissive => Ok(None),
        Mode::Strict => Err(error()),
    }
}

fn render(trail: &[&Key]) -> String {
    if trail.is_empty() {
        return "(root)".to_string();
    }
    trail
        .iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
