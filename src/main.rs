mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::context::Settings;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose, args.quiet);

    let result = Settings::resolve(&args).and_then(|settings| match &args.command {
        Commands::Header { file, json } => cli::commands::header::execute(file, *json, settings),
        Commands::Decrypt { file, output } => {
            cli::commands::decrypt::execute(file, output.as_deref(), settings)
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "pgp_ingest=error"
    } else if verbose {
        "pgp_ingest=info"
    } else {
        "pgp_ingest=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
