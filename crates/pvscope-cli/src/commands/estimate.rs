//! Estimate command implementation

use crate::cli::EstimateArgs;
use crate::output::{potential_label, OutputWriter};
use crate::output_types::{BreakdownRow, EstimateOutput};
use anyhow::Result;
use pvscope_core::config::LayeredConfig;
use pvscope_core::export::AreaBreakdown;
use pvscope_core::PvEstimator;

pub fn execute(args: EstimateArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let estimator = PvEstimator::new(config.coefficients()?)?;
    let estimation = estimator.estimate(args.area_m2)?;
    let result = EstimateOutput::from(estimation);

    if output.is_json() {
        output.result(result)?;
    } else {
        print_estimation(&result, output)?;
    }

    Ok(())
}

/// KPI tiles followed by the area breakdown
pub(crate) fn print_estimation(result: &EstimateOutput, output: &OutputWriter) -> Result<()> {
    let formatted = &result.formatted;

    output.section("PV Estimation");
    output.kv("Total Area", &formatted.total_area);
    output.kv("Usable Area", &formatted.usable_area);
    output.kv("Installed Capacity", &formatted.installed_capacity);
    output.kv("Annual Yield", &formatted.annual_yield);
    output.kv("CO2 Savings", &formatted.co2_savings);
    output.kv("Potential", potential_label(result.estimation.potential));

    output.section("Area Breakdown");
    output.table(BreakdownRow::rows(&AreaBreakdown::from(&result.estimation)))
}
