//! Write commands: `set` and `forget`.
//!
//! Without `--write` the edited document is printed. With it, the document is
//! saved back to the file it was loaded from.

use keypath::Config;

use super::{CommandResult, parse_value};
use crate::cli::{ForgetArgs, SetArgs};
use crate::output::OutputFormat;

/// Run the `set` command
pub fn set(mut config: Config, args: &SetArgs, format: OutputFormat) -> CommandResult {
    config.set(&args.path, parse_value(&args.value));
    finish(&config, args.write, format)
}

/// Run the `forget` command
pub fn forget(mut config: Config, args: &ForgetArgs, format: OutputFormat) -> CommandResult {
    let removed = config.forget(&args.path);
    tracing::info!(path = %args.path, removed, "forget");

    if args.write {
        save_in_place(&config)?;
    }

    match format {
        OutputFormat::Human => {
            println!("Removed {removed} entries");
            if !args.write {
                println!("{}", serde_json::to_string_pretty(config.root())?);
            }
        }
        OutputFormat::Json => {
            let value = if args.write {
                serde_json::json!({ "removed": removed })
            } else {
                serde_json::json!({
                    "removed": removed,
                    "document": config.root(),
                })
            };
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

fn finish(config: &Config, write: bool, format: OutputFormat) -> CommandResult {
    if write {
        save_in_place(config)?;
        return Ok(());
    }

    match format {
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(config.root())?),
        OutputFormat::Json => println!("{}", serde_json::to_string(config.root())?),
    }

    Ok(())
}

fn save_in_place(config: &Config) -> CommandResult {
    let Some(path) = config.source() else {
        return Err("--write needs a document loaded with --file".into());
    };
    config.save(path)?;
    tracing::info!(path = %path.display(), "saved document");
    Ok(())
}
