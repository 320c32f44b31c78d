//! Error types for strict path lookups.
//!
//! The permissive operations in [`crate::dot`] never fail. These errors are
//! only produced by [`try_get`](crate::dot::try_get).

use thiserror::Error;

/// Structured errors for a strict lookup.
///
/// Paths in the variants are the concrete keys walked so far, with wildcard
/// positions filled in by the child actually visited.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The path string was empty
    #[error("Empty path")]
    EmptyPath,

    /// A literal segment named a key the map does not have
    #[error("Key '{key}' not found under {path}")]
    MissingKey { path: String, key: String },

    /// A segment needed to descend into a value that is not a map
    #[error("Cannot descend into {path}: expected map, found {found}")]
    NotAMap { path: String, found: &'static str },
}

impl LookupError {
    /// Check if this error is a missing key or an empty path
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::MissingKey { .. } | LookupError::EmptyPath
        )
    }

    /// Check if this error is a structural mismatch
    pub fn is_shape_error(&self) -> bool {
        matches!(self, LookupError::NotAMap { .. })
    }

    /// Get the path at which the lookup stopped, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            LookupError::MissingKey { path, .. } | LookupError::NotAMap { path, .. } => {
                Some(path)
            }
            LookupError::EmptyPath => None,
        }
    }
}

// Conversion from LookupError to the main Error type
impl From<LookupError> for crate::Error {
    fn from(err: LookupError) -> Self {
        crate::Error::Lookup(err)
    }
}
