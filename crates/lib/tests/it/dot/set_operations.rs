//! Tests for `dot::set`

use keypath::{dot, node::Node};
use serde_json::json;

use crate::helpers::tree;

#[test]
fn test_sets_a_simple_key() {
    let mut root = Node::map();
    dot::set(&mut root, "app.name", "demo");

    assert_eq!(root, tree(json!({"app": {"name": "demo"}})));
}

#[test]
fn test_overwrites_existing_value() {
    let mut root = tree(json!({"app": {"name": "old"}}));
    dot::set(&mut root, "app.name", "demo");

    assert_eq!(root, tree(json!({"app": {"name": "demo"}})));
}

#[test]
fn test_creates_nested_maps_automatically() {
    let mut root = Node::map();
    dot::set(&mut root, "app.config.env", "local");

    assert_eq!(root, tree(json!({"app": {"config": {"env": "local"}}})));
}

#[test]
fn test_sets_multiple_keys_independently() {
    let mut root = Node::map();
    dot::set(&mut root, "app.name", "demo");
    dot::set(&mut root, "app.version", "1.0");

    assert_eq!(root, tree(json!({"app": {"name": "demo", "version": "1.0"}})));
}

#[test]
fn test_overwrites_leaf_in_the_way() {
    let mut root = tree(json!({"app": "wrong"}));
    dot::set(&mut root, "app.name", "demo");

    assert_eq!(root, tree(json!({"app": {"name": "demo"}})));
}

#[test]
fn test_replaces_leaf_root() {
    let mut root = Node::from(42);
    dot::set(&mut root, "a", 1);

    assert_eq!(root, tree(json!({"a": 1})));
}

#[test]
fn test_empty_path_is_noop() {
    let mut root = tree(json!({"a": 1}));
    dot::set(&mut root, "", "ignored");

    assert_eq!(root, tree(json!({"a": 1})));
}

#[test]
fn test_replaces_branch_wholesale() {
    let mut root = tree(json!({"db": {"port": 1, "host": "x"}}));
    dot::set(&mut root, "db", json!({"url": "y"}));

    assert_eq!(root, tree(json!({"db": {"url": "y"}})));
}

#[test]
fn test_replaced_key_keeps_its_position() {
    let mut root = tree(json!({"a": 1, "b": 2, "c": 3}));
    dot::set(&mut root, "b", 20);

    assert_eq!(dot::keys(&root), ["a", "b", "c"]);
}

#[test]
fn test_numeric_segment_addresses_list_entry() {
    let mut root = tree(json!({"ports": [80, 443]}));
    dot::set(&mut root, "ports.1", 8443);
    dot::set(&mut root, "ports.2", 9000);

    assert_eq!(root, tree(json!({"ports": [80, 8443, 9000]})));
}

#[test]
fn test_wildcard_segment_is_a_literal_key_for_writes() {
    let mut root = tree(json!({"db": {"mysql": {"port": 1}}}));
    dot::set(&mut root, "db.*.port", 2);

    assert_eq!(
        root,
        tree(json!({"db": {"mysql": {"port": 1}, "*": {"port": 2}}}))
    );
}

#[test]
fn test_node_set_path_chains() {
    let mut root = Node::map();
    root.set_path("a.b", 1).set_path("a.c", true);

    assert_eq!(root, tree(json!({"a": {"b": 1, "c": true}})));
}

#[test]
fn test_sets_unsigned_values() {
    let mut root = Node::map();
    dot::set(&mut root, "limits.max", u64::MAX);
    dot::set(&mut root, "limits.min", 5u64);

    assert_eq!(root.to_json_string(), r#"{"limits":{"max":18446744073709551615,"min":5}}"#);
    assert_eq!(root, tree(json!({"limits": {"max": u64::MAX, "min": 5}})));
}
