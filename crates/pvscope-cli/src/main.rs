//! PVScope CLI - Command-line interface
//!
//! Estimates rooftop PV potential for an area or a drawn GeoJSON shape.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use output::OutputWriter;

fn main() {
    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = OutputWriter::new(cli.json);

    if let Err(error) = commands::execute(cli, &output) {
        if output.is_json() {
            output.error(format!("{:#}", error));
        } else {
            errors::from_anyhow(error).display();
        }
        std::process::exit(1);
    }
}
