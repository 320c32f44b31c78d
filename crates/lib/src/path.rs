//! Dotted key paths.
//!
//! A path string is split on `.` into [`Segment`]s. Each segment is either a
//! literal [`Key`] or the wildcard `*`. Splitting is purely mechanical and
//! does not normalize: `"a..b"` has three segments, the middle one being the
//! empty-string key.
//!
//! # Usage
//!
//! ```rust
//! use keypath::path::{KeyPath, Segment};
//! use keypath::node::Key;
//!
//! let path = KeyPath::parse("db.*.port");
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.segments()[1], Segment::Wildcard);
//! assert!(path.has_wildcard());
//!
//! // Build incrementally
//! let path = KeyPath::new().push("db").push(Segment::Wildcard).push("port");
//! assert_eq!(path.to_string(), "db.*.port");
//! assert_eq!(path.segments()[2], Segment::Literal(Key::new("port")));
//! ```

use std::{convert::Infallible, fmt, str::FromStr};

use crate::node::Key;

/// Path separator
pub const SEPARATOR: char = '.';

/// Wildcard segment text
pub const WILDCARD: &str = "*";

/// One dot-delimited unit of a [`KeyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matches exactly one key
    Literal(Key),
    /// Matches every key of a map at this position
    Wildcard,
}

impl Segment {
    /// Parses one segment. `*` is the wildcard, anything else is a literal.
    pub fn new(s: &str) -> Self {
        if s == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Literal(Key::new(s))
        }
    }

    /// The key this segment names when used as a write target.
    ///
    /// Writes never fan out, so the wildcard is the literal key `"*"` here.
    pub fn to_key(&self) -> Key {
        match self {
            Segment::Literal(key) => key.clone(),
            Segment::Wildcard => Key::Name(WILDCARD.to_string()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(key) => write!(f, "{key}"),
            Segment::Wildcard => f.write_str(WILDCARD),
        }
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::new(value)
    }
}

impl From<Key> for Segment {
    fn from(value: Key) -> Self {
        Segment::Literal(value)
    }
}

impl From<u64> for Segment {
    fn from(value: u64) -> Self {
        Segment::Literal(Key::Index(value))
    }
}

/// A parsed, immutable sequence of [`Segment`]s.
///
/// Parsing never fails. The empty string parses to a single empty-string
/// literal, which [`is_empty`](KeyPath::is_empty) reports as the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Creates the empty path
    pub fn new() -> Self {
        Self {
            segments: vec![Segment::Literal(Key::Name(String::new()))],
        }
    }

    /// Splits a dotted string into segments.
    pub fn parse(s: &str) -> Self {
        Self {
            segments: s.split(SEPARATOR).map(Segment::new).collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the path parsed from `""`.
    pub fn is_empty(&self) -> bool {
        matches!(
            self.segments.as_slice(),
            [Segment::Literal(Key::Name(name))] if name.is_empty()
        )
    }

    /// Returns `true` if any segment is a wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    /// Returns the last segment.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns the parent path, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<KeyPath> {
        match self.segments.split_last() {
            Some((_, parents)) if !parents.is_empty() => Some(KeyPath {
                segments: parents.to_vec(),
            }),
            _ => None,
        }
    }

    /// Appends a segment. Pushing onto the empty path replaces it.
    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        let segment = segment.into();
        if self.is_empty() {
            self.segments = vec![segment];
        } else {
            self.segments.push(segment);
        }
        self
    }

    /// Appends every segment of `other`. Joining the empty path is a no-op.
    pub fn join(mut self, other: &KeyPath) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other.clone();
        }
        self.segments.extend(other.segments.iter().cloned());
        self
    }
}

impl Default for KeyPath {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty path)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Joins a prefix and a key with the separator, omitting it for an empty prefix.
pub(crate) fn join_prefix(prefix: &str, key: &Key) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{key}")
    }
}
