//! Subcommand implementations.
//!
//! Every command works on a [`Config`] loaded from `--file`, or from stdin when
//! no file is given.

use std::io::Read;
use std::path::Path;

use keypath::{Config, Node};

pub mod edit;
pub mod list;
pub mod query;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Loads the document from a file, or parses stdin when `file` is `None`
pub fn load_document(file: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(Config::load(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            tracing::debug!(bytes = text.len(), "read document from stdin");
            Ok(Config::from_json_str(&text)?)
        }
    }
}

/// Parses a command-line value as JSON, falling back to a plain string.
///
/// `8080` is a number and `{"a": 1}` is a map, while `localhost` is the text
/// `"localhost"`.
pub fn parse_value(raw: &str) -> Node {
    serde_json::from_str::<Node>(raw).unwrap_or_else(|_| Node::from(raw))
}
