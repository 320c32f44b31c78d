//! Read commands: `get` and `has`.

use keypath::{Config, dot::Lookup};

use super::CommandResult;
use crate::cli::PathArgs;
use crate::output::{OutputFormat, render_human};

/// Run the `get` command
pub fn get(config: &Config, args: &PathArgs, format: OutputFormat) -> CommandResult {
    let Some(lookup) = config.get(&args.path) else {
        return Err(format!("path not found: {}", args.path).into());
    };

    match format {
        OutputFormat::Human => match lookup {
            Lookup::One(node) => println!("{}", render_human(node)?),
            Lookup::Many(nodes) => {
                for node in nodes {
                    println!("{}", render_human(node)?);
                }
            }
        },
        OutputFormat::Json => {
            let value = match lookup {
                Lookup::One(node) => serde_json::Value::from(node),
                Lookup::Many(nodes) => nodes.into_iter().map(serde_json::Value::from).collect(),
            };
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

/// Run the `has` command
pub fn has(config: &Config, args: &PathArgs, format: OutputFormat) -> CommandResult {
    let present = config.has(&args.path);

    match format {
        OutputFormat::Human => println!("{present}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": args.path,
                "present": present,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
