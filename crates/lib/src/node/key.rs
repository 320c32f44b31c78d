//! Map keys.
//!
//! A key is either a string name or a non-negative integer index. The two
//! forms are unified at construction time: any string that is the canonical
//! decimal spelling of a non-negative integer becomes [`Key::Index`], so
//! `Key::from("1") == Key::from(1u64)`.

use std::fmt;

/// A key inside a [`NodeMap`](super::NodeMap).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Non-negative integer key, e.g. the positions of a parsed JSON array
    Index(u64),
    /// Any other string key
    Name(String),
}

impl Key {
    /// Builds a key from a string, normalizing canonical integers to [`Key::Index`].
    ///
    /// ```
    /// # use keypath::node::Key;
    /// assert_eq!(Key::new("8"), Key::Index(8));
    /// assert_eq!(Key::new("08"), Key::Name("08".to_string()));
    /// assert_eq!(Key::new("-1"), Key::Name("-1".to_string()));
    /// ```
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        match parse_index(&s) {
            Some(index) => Key::Index(index),
            None => Key::Name(s),
        }
    }

    /// Returns the integer value if this is an index key.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Returns the string value if this is a named key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

/// Parses the canonical decimal form only: no sign, no leading zeros.
fn parse_index(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::new(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::new(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::new(value.as_str())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Index(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(value as u64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as u64)
    }
}
