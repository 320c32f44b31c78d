//! Behavioral properties that must hold across the whole engine

use keypath::{
    dot::{self, Lookup},
    node::Node,
};
use serde_json::json;

use crate::helpers::{assert_many, connections, tree};

fn sample_paths() -> Vec<&'static str> {
    vec![
        "name",
        "db.connections.mysql.port",
        "db.connections.mysql",
        "db.connections.redis.port",
        "db",
        "ports.3",
        "a..b",
        "new.deep.branch.leaf",
    ]
}

fn sample_values() -> Vec<Node> {
    vec![
        Node::from("text"),
        Node::from(0),
        Node::from(false),
        Node::null(),
        Node::map(),
        tree(json!({"nested": {"list": [1, 2]}})),
    ]
}

#[test]
fn test_set_then_get_round_trips() {
    for path in sample_paths() {
        for value in sample_values() {
            let mut root = connections();
            dot::set(&mut root, path, value.clone());

            assert_eq!(
                dot::get(&root, path),
                Some(Lookup::One(&value)),
                "round trip failed for {path}"
            );
        }
    }
}

#[test]
fn test_forget_is_idempotent() {
    let paths = [
        "db.connections.mysql.port",
        "db.*.port",
        "db.*.*.port",
        "db.connections.*",
        "*.*",
        "*",
        "db",
        "missing.key",
    ];
    for path in paths {
        let mut once = connections();
        dot::forget(&mut once, path);

        let mut twice = once.clone();
        assert_eq!(dot::forget(&mut twice, path), 0, "second forget of {path} removed entries");
        assert_eq!(once, twice, "forget of {path} is not idempotent");
    }
}

#[test]
fn test_reads_never_modify_the_tree() {
    let root = connections();
    let before = root.clone();

    let _ = dot::get(&root, "db.*.*.port");
    let _ = dot::has(&root, "db.connections.missing.port");
    let _ = dot::flatten(&root, "prefix");
    let _ = dot::try_get(&root, "db.connections.mysql.host.x");

    assert_eq!(root, before);
}

#[test]
fn test_wildcard_flattening_depth_holds_simultaneously() {
    let root = tree(json!({"a": {"x": {"p": 1}, "y": {"p": 2}}}));

    assert_many(dot::get(&root, "a.*.*"), json!([1, 2]));
    assert_many(dot::get(&root, "a.*"), json!([{"p": 1}, {"p": 2}]));
}

#[test]
fn test_no_match_wildcard_is_empty_not_absent() {
    let root = tree(json!({"a": {"x": {"p": 1}, "y": {"p": 2}}}));

    assert_many(dot::get(&root, "a.*.missing"), json!([]));
}

#[test]
fn test_wildcard_skips_scalar_children() {
    let root = tree(json!({"a": {"x": {"x": "found"}, "y": "scalar"}}));

    assert_many(dot::get(&root, "a.*.x"), json!(["found"]));
}

#[test]
fn test_forget_asymmetry() {
    let original = tree(json!({"db": {"mysql": {"port": 1}, "pgsql": {"port": 2}}}));

    let mut root = original.clone();
    dot::forget(&mut root, "db.*.port");
    assert_eq!(root, tree(json!({"db": {"mysql": {}, "pgsql": {}}})));

    let mut root = original;
    dot::forget(&mut root, "db.mysql");
    assert_eq!(root, tree(json!({"db": {"pgsql": {"port": 2}}})));
}

#[test]
fn test_flatten_stops_at_empty_maps() {
    let root = tree(json!({"cache": [], "config": {"paths": []}}));
    let flat = dot::flatten(&root, "");

    assert_eq!(flat.len(), 2);
    assert!(flat["cache"].is_empty_map());
    assert!(flat["config.paths"].is_empty_map());
}

#[test]
fn test_has_reports_empty_map_as_absent() {
    let root = tree(json!({"cache": {}}));

    assert!(!dot::has(&root, "cache"));
    assert!(dot::get(&root, "cache").is_some());
}
