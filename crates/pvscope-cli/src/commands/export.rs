//! Export command implementation

use crate::cli::ExportArgs;
use crate::output::OutputWriter;
use crate::output_types::ExportOutput;
use anyhow::{Context, Result};
use pvscope_core::config::LayeredConfig;
use pvscope_core::export::EstimationExport;
use pvscope_core::PvEstimator;
use std::fs;
use std::path::Path;

pub fn execute(args: ExportArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let estimator = PvEstimator::new(config.coefficients()?)?;
    let estimation = estimator.estimate(args.area_m2)?;
    let export = EstimationExport::from(&estimation);

    // "-" streams the record itself
    if args.output == Path::new("-") {
        return output.data(&export);
    }

    fs::write(&args.output, export.to_pretty_json()?)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let path = args.output.display().to_string();
    tracing::debug!(path = %path, "Wrote estimation export");

    if output.is_json() {
        output.result(ExportOutput { path, export })?;
    } else {
        output.success(format!("Exported estimation to {}", path));
    }

    Ok(())
}
