//!
//! keypath: dot-notation key paths over nested configuration trees.
//!
//! This library reads, writes, deletes, and enumerates values inside an
//! arbitrarily nested, dynamically shaped tree (the kind produced by parsing
//! a configuration file or a JSON payload) using dotted path strings.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: The tree itself. A node is either a scalar leaf or an ordered map of child nodes; lists are maps keyed `0..n`.
//! * **Paths (`path::KeyPath`)**: A dotted string split into literal key segments and `*` wildcard segments.
//! * **Path engine (`dot`)**: `set`, `get`, `has`, `forget`, `flatten`, `keys`, `values`, plus `expand` and the strict `try_get`.
//! * **Configuration (`config::Config`)**: A JSON-backed tree with required and typed accessors built on the engine.

pub mod config;
pub mod dot;
pub mod node;
pub mod path;

pub use config::Config;
pub use node::Node;
pub use path::KeyPath;

/// Result type used throughout the keypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the keypath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured strict-lookup errors from the dot module
    #[error(transparent)]
    Lookup(dot::LookupError),

    /// Structured configuration errors from the config module
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Lookup(_) => "dot",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Lookup(lookup_err) => lookup_err.is_not_found(),
            Error::Config(config_err) => config_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Config(config_err) => config_err.is_io_error(),
            _ => false,
        }
    }
}
