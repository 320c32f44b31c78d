//! CLI argument definitions for the keypath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Query and edit JSON documents with dotted key paths
#[derive(Parser, Debug)]
#[command(name = "keypath")]
#[command(about = "Read, write, and enumerate nested JSON values by dotted path")]
#[command(version)]
pub struct Cli {
    /// JSON document to operate on. Reads stdin when omitted.
    #[arg(short, long, global = true, env = "KEYPATH_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "human")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path. `*` segments collect every match.
    Get(PathArgs),
    /// Print whether a path holds a non-empty value
    Has(PathArgs),
    /// List every dotted path to a terminal value
    Keys,
    /// List every terminal value
    Values,
    /// Print every dotted path with its terminal value
    Flatten(FlattenArgs),
    /// Write a value at a path
    Set(SetArgs),
    /// Delete a path
    Forget(ForgetArgs),
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Dotted key path, e.g. `db.connections.*.port`
    pub path: String,
}

#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// Prefix prepended to every path
    #[arg(short, long, default_value = "")]
    pub prefix: String,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dotted key path. `*` is written as a literal key.
    pub path: String,

    /// Value to write. Parsed as JSON, otherwise taken as a string.
    pub value: String,

    /// Save the document back to --file instead of printing it
    #[arg(short, long)]
    pub write: bool,
}

#[derive(clap::Args, Debug)]
pub struct ForgetArgs {
    /// Dotted key path
    pub path: String,

    /// Save the document back to --file instead of printing it
    #[arg(short, long)]
    pub write: bool,
}
