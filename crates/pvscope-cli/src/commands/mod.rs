//! Command implementations

mod config;
mod estimate;
mod export;
mod measure;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli, output: &OutputWriter) -> Result<()> {
    let method = match &cli.command {
        Commands::Measure(args) => args.method,
        _ => None,
    };
    let config = load_config(cli.config.as_deref(), cli.coefficients.into_overrides(method))?;

    match cli.command {
        Commands::Estimate(args) => estimate::execute(args, &config, output),
        Commands::Measure(args) => measure::execute(args, &config, output),
        Commands::Export(args) => export::execute(args, &config, output),
        Commands::Config => config::execute(&config, output),
    }
}
