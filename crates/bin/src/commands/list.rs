//! Enumeration commands: `keys`, `values`, and `flatten`.

use keypath::Config;

use super::CommandResult;
use crate::cli::FlattenArgs;
use crate::output::{OutputFormat, print_table, render_inline};

/// Run the `keys` command
pub fn keys(config: &Config, format: OutputFormat) -> CommandResult {
    let keys = config.keys();

    match format {
        OutputFormat::Human => {
            for key in &keys {
                println!("{key}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&keys)?),
    }

    Ok(())
}

/// Run the `values` command
pub fn values(config: &Config, format: OutputFormat) -> CommandResult {
    let values = config.values();

    match format {
        OutputFormat::Human => {
            for value in values {
                println!("{}", render_inline(value));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&values)?),
    }

    Ok(())
}

/// Run the `flatten` command
pub fn flatten(config: &Config, args: &FlattenArgs, format: OutputFormat) -> CommandResult {
    let flat = config.flatten(&args.prefix);

    match format {
        OutputFormat::Human => {
            if flat.is_empty() {
                println!("No entries found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = flat
                .iter()
                .map(|(path, node)| vec![path.clone(), render_inline(node)])
                .collect();
            print_table(&["PATH", "VALUE"], &rows);
        }
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = flat
                .into_iter()
                .map(|(path, node)| (path, serde_json::Value::from(node)))
                .collect();
            println!("{}", serde_json::to_string(&object)?);
        }
    }

    Ok(())
}
