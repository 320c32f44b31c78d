//! Tests for `*` segments in `dot::get` and `dot::has`

use keypath::{
    dot::{self, Lookup},
    node::Node,
};
use serde_json::json;

use crate::helpers::{assert_many, connections, tree};

fn mixed_app() -> Node {
    tree(json!({
        "app": {
            "name": "demo",
            "debug": false,
            "services": {
                "web": {"port": 8080},
                "worker": {"port": 9090},
            },
        }
    }))
}

#[test]
fn test_wildcard_get_ports() {
    assert_many(dot::get(&connections(), "db.connections.*.port"), json!([3306, 5432]));
}

#[test]
fn test_wildcard_at_multiple_levels() {
    assert_many(dot::get(&connections(), "db.*.*.port"), json!([3306, 5432]));
}

#[test]
fn test_wildcard_collects_every_leaf() {
    let expected = json!(["127.0.0.1", 3306, "0.0.0.0", 5432]);

    assert_many(dot::get(&connections(), "db.*.*.*"), expected.clone());
    assert_many(dot::get(&connections(), "*.*.*.*"), expected);
}

#[test]
fn test_wildcard_preserves_value_types() {
    let root = tree(json!({
        "types": {"int": 1, "float": 1.5, "bool": true, "null": null, "text": "x", "map": {"k": "v"}}
    }));

    assert_many(
        dot::get(&root, "types.*"),
        json!([1, 1.5, true, null, "x", {"k": "v"}]),
    );
}

#[test]
fn test_wildcard_skips_non_map_children() {
    assert_many(dot::get(&mixed_app(), "app.*.*"), json!([{"port": 8080}, {"port": 9090}]));
    assert_many(dot::get(&mixed_app(), "app.*.*.port"), json!([8080, 9090]));
}

#[test]
fn test_wildcard_with_missing_suffix_is_empty() {
    let root = connections();

    assert_eq!(dot::get(&root, "db.*.mongodb"), Some(Lookup::Many(vec![])));
    assert!(!dot::has(&root, "db.*.mongodb"));
}

#[test]
fn test_has_with_wildcard() {
    let root = connections();

    assert!(dot::has(&root, "db.connections.*.host"));
    assert!(!dot::has(&root, "db.connections.*.user"));
}

#[test]
fn test_wildcard_result_shapes() {
    let root = tree(json!({"a": {"x": {"port": 1}, "y": {"port": 2}}}));

    assert_many(dot::get(&root, "a.*.port"), json!([1, 2]));
    assert_many(dot::get(&root, "a.*.*"), json!([1, 2]));
    assert_many(dot::get(&root, "a.*"), json!([{"port": 1}, {"port": 2}]));
}

#[test]
fn test_nested_wildcard_results_are_spliced() {
    let root = tree(json!({
        "regions": {
            "eu": {"hosts": {"a": {"ip": "10.0.0.1"}, "b": {"ip": "10.0.0.2"}}},
            "us": {"hosts": {"c": {"ip": "10.1.0.1"}}},
        }
    }));

    let lookup = dot::get(&root, "regions.*.hosts.*.ip");
    assert_many(lookup, json!(["10.0.0.1", "10.0.0.2", "10.1.0.1"]));
}

#[test]
fn test_wildcard_over_list() {
    let root = tree(json!({"servers": [{"name": "a"}, {"name": "b"}, "broken"]}));

    assert_many(dot::get(&root, "servers.*.name"), json!(["a", "b"]));
    assert_eq!(dot::get(&root, "servers.*").map(|l| l.len()), Some(3));
}

#[test]
fn test_top_level_wildcard_on_leaf_root() {
    let root = Node::from(42);

    assert_eq!(dot::get(&root, "*"), Some(Lookup::Many(vec![])));
    assert!(!dot::has(&root, "*"));
}

#[test]
fn test_wildcard_after_missing_literal_is_none() {
    let root = connections();

    assert_eq!(dot::get(&root, "cache.*"), None);
    assert_eq!(dot::get(&root, "db.connections.mysql.port.*"), Some(Lookup::Many(vec![])));
}

#[test]
fn test_wildcard_on_empty_map() {
    let root = tree(json!({"empty": {}}));

    assert_eq!(dot::get(&root, "empty.*"), Some(Lookup::Many(vec![])));
}
