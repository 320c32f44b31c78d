use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing. Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("keypath=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_document(cli.file.as_deref())?;
    let format = cli.output;

    match &cli.command {
        Commands::Get(args) => commands::query::get(&config, args, format),
        Commands::Has(args) => commands::query::has(&config, args, format),
        Commands::Keys => commands::list::keys(&config, format),
        Commands::Values => commands::list::values(&config, format),
        Commands::Flatten(args) => commands::list::flatten(&config, args, format),
        Commands::Set(args) => commands::edit::set(config, args, format),
        Commands::Forget(args) => commands::edit::forget(config, args, format),
    }
}
