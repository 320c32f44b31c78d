//! Configuration access on top of the path engine.
//!
//! [`Config`] owns a root [`Node`] loaded from JSON and exposes the
//! [`dot`] operations against it. It adds what an application-facing accessor
//! needs: required keys that surface as errors, and typed reads through
//! serde.
//!
//! ```
//! use keypath::config::Config;
//!
//! let config = Config::from_json_str(r#"{"app": {"name": "demo", "workers": 4}}"#)?;
//! assert_eq!(config.require_as::<String>("app.name")?, "demo");
//! assert_eq!(config.get_as::<u16>("app.port")?, None);
//! assert!(config.require("app.port").unwrap_err().is_not_found());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::{
    Result,
    dot::{self, Flattened, Lookup},
    node::Node,
};

pub mod errors;

pub use errors::ConfigError;

/// A configuration tree and the file it came from, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    root: Node,
    source: Option<PathBuf>,
}

impl Config {
    /// Wraps an already materialized tree
    pub fn new(root: impl Into<Node>) -> Self {
        Self {
            root: root.into(),
            source: None,
        }
    }

    /// Parses JSON text into a configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(Self::new(parse_json(text, "<string>")?))
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let root = parse_json(&text, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            entries = dot::keys(&root).len(),
            "loaded configuration"
        );
        Ok(Self {
            root,
            source: Some(path.to_path_buf()),
        })
    }

    /// Writes the tree as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut text = serde_json::to_string_pretty(&self.root)?;
        text.push('\n');
        std::fs::write(path, text).map_err(|source| ConfigError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// The file this configuration was loaded from
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn get(&self, path: impl AsRef<str>) -> Option<Lookup<'_>> {
        dot::get(&self.root, path)
    }

    pub fn has(&self, path: impl AsRef<str>) -> bool {
        dot::has(&self.root, path)
    }

    pub fn set(&mut self, path: impl AsRef<str>, value: impl Into<Node>) -> &mut Self {
        dot::set(&mut self.root, path, value);
        self
    }

    pub fn forget(&mut self, path: impl AsRef<str>) -> usize {
        dot::forget(&mut self.root, path)
    }

    pub fn flatten(&self, prefix: &str) -> Flattened<'_> {
        dot::flatten(&self.root, prefix)
    }

    pub fn keys(&self) -> Vec<String> {
        dot::keys(&self.root)
    }

    pub fn values(&self) -> Vec<&Node> {
        dot::values(&self.root)
    }

    /// Gets a value that must be present.
    ///
    /// Uses the same presence rule as [`dot::has`], so an empty map or a null
    /// counts as missing.
    pub fn require(&self, path: impl AsRef<str>) -> std::result::Result<Lookup<'_>, ConfigError> {
        let path = path.as_ref();
        match self.get(path) {
            Some(lookup) if lookup.is_present() => Ok(lookup),
            _ => Err(ConfigError::MissingKey {
                path: path.to_string(),
            }),
        }
    }

    /// Gets a value and deserializes it, or `None` if the path is not found.
    ///
    /// Wildcard results deserialize as a sequence.
    pub fn get_as<T: DeserializeOwned>(
        &self,
        path: impl AsRef<str>,
    ) -> std::result::Result<Option<T>, ConfigError> {
        let path = path.as_ref();
        self.get(path)
            .map(|lookup| deserialize(path, &lookup))
            .transpose()
    }

    /// Gets a required value and deserializes it.
    pub fn require_as<T: DeserializeOwned>(
        &self,
        path: impl AsRef<str>,
    ) -> std::result::Result<T, ConfigError> {
        let path = path.as_ref();
        let lookup = self.require(path)?;
        deserialize(path, &lookup)
    }
}

impl From<Node> for Config {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

fn parse_json(text: &str, origin: &str) -> std::result::Result<Node, ConfigError> {
    serde_json::from_str::<Node>(text).map_err(|e| ConfigError::ParseFailed {
        path: origin.to_string(),
        reason: e.to_string(),
    })
}

fn deserialize<T: DeserializeOwned>(
    path: &str,
    lookup: &Lookup<'_>,
) -> std::result::Result<T, ConfigError> {
    let value = match lookup {
        Lookup::One(node) => serde_json::Value::from(*node),
        Lookup::Many(nodes) => nodes
            .iter()
            .map(|node| serde_json::Value::from(*node))
            .collect(),
    };
    serde_json::from_value(value).map_err(|e| ConfigError::TypeMismatch {
        path: path.to_string(),
        expected: std::any::type_name::<T>(),
        reason: e.to_string(),
    })
}
