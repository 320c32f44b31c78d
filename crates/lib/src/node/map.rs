//! Ordered map of child nodes.

use indexmap::IndexMap;

use super::{Key, Node};

/// An insertion-ordered, unique-keyed collection of [`Node`]s.
///
/// Iteration order is insertion order. Removing an entry keeps the relative
/// order of the entries that remain, which is observable through
/// [`flatten`](crate::dot::flatten) and the wildcard lookups.
#[derive(Debug, Clone, Default)]
pub struct NodeMap {
    entries: IndexMap<Key, Node>,
}

impl NodeMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces a child, returning the previous value.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), value.into())
    }

    /// Appends a value under the next free integer key.
    ///
    /// The next key is one past the largest existing index, or `0` when the
    /// map has no index keys.
    pub fn push(&mut self, value: impl Into<Node>) -> Key {
        let next = self
            .entries
            .keys()
            .filter_map(Key::as_index)
            .max()
            .map_or(0, |max| max + 1);
        let key = Key::Index(next);
        self.entries.insert(key.clone(), value.into());
        key
    }

    /// Removes a child, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &Key) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    /// Keeps only the entries for which `f` returns true, in order.
    pub fn retain(&mut self, f: impl FnMut(&Key, &mut Node) -> bool) {
        self.entries.retain(f);
    }

    /// Returns the child at `key`, inserting an empty map first if it is absent.
    pub fn entry_or_map(&mut self, key: Key) -> &mut Node {
        self.entries.entry(key).or_insert_with(Node::map)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Node)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Node)> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.entries.values_mut()
    }

    /// True when the keys are exactly `0..len` in order, i.e. the map is
    /// shaped like a list.
    pub fn is_sequential(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_index() == Some(i as u64))
    }

    /// Builder method to insert a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }
}

/// Equality is order-sensitive: two maps with the same entries in a
/// different order are not equal.
impl PartialEq for NodeMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Into<Key>, V: Into<Node>> FromIterator<(K, V)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = NodeMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<Key>, V: Into<Node>> Extend<(K, V)> for NodeMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for NodeMap {
    type Item = (Key, Node);
    type IntoIter = indexmap::map::IntoIter<Key, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a Key, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, Key, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
