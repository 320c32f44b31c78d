use keypath::node::{Node, NodeMap};

/// Builds a tree of `groups` sections, each holding `services` maps with a
/// host, a port, and a list of tags.
///
/// Shaped like `groups.group_N.service_M.{host,port,tags}` so wildcard reads
/// have a realistic fan-out at two levels.
pub fn service_tree(groups: usize, services: usize) -> Node {
    let mut root = NodeMap::with_capacity(groups);
    for g in 0..groups {
        let mut group = NodeMap::with_capacity(services);
        for s in 0..services {
            let service = NodeMap::new()
                .with("host", format!("10.{g}.{s}.1"))
                .with("port", (8000 + s) as i64)
                .with("tags", Node::from_iter(["web", "internal"]));
            group.insert(format!("service_{s}"), service);
        }
        root.insert(format!("group_{g}"), group);
    }
    Node::Map(NodeMap::new().with("groups", root))
}
