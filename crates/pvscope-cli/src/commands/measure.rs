//! Measure command implementation

use crate::cli::MeasureArgs;
use crate::output::OutputWriter;
use crate::output_types::{EstimateOutput, MeasureOutput};
use anyhow::{Context, Result};
use pvscope_core::config::LayeredConfig;
use pvscope_core::export::MapOverlay;
use pvscope_core::format::format_area;
use pvscope_core::ports::AreaMeasurer;
use pvscope_core::selection::{AreaSelectionState, DrawEvent};
use pvscope_core::PvEstimator;
use pvscope_geo::models::RingExt;
use pvscope_geo::{parse_ring, PolygonAreaMeasurer};
use std::fs;

use super::estimate::print_estimation;

pub fn execute(args: MeasureArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let source = read_input(&args.input)?;
    let ring = parse_ring(&source)?;

    let measurer = PolygonAreaMeasurer::new(config.area_method.value);
    let estimator = PvEstimator::new(config.coefficients()?)?;

    let mut state = AreaSelectionState::new(measurer, estimator);
    let selection = state.handle(DrawEvent::Created(ring.clone()))?.copied();

    let result = MeasureOutput {
        method: measurer.method(),
        area_m2: selection.map(|s| s.area_m2).unwrap_or(0.0),
        bounds: selection.map(|s| s.bounds),
        centroid: ring.centroid(),
        estimation: selection.map(|s| EstimateOutput::from(s.estimation)),
        overlay: selection.map(|s| MapOverlay::from(&s.estimation)),
    };

    if output.is_json() {
        return output.result(result);
    }

    output.section("Selection");
    output.kv("Method", result.method);
    output.kv("Area", format_area(result.area_m2));
    if let Some(bounds) = result.bounds {
        output.kv(
            "Bounds",
            format!(
                "{:.6}, {:.6} to {:.6}, {:.6}",
                bounds.min_lat, bounds.min_lon, bounds.max_lat, bounds.max_lon
            ),
        );
    }
    if let Some(centroid) = result.centroid {
        output.kv("Centroid", format!("{:.6}, {:.6}", centroid.lat, centroid.lon));
    }

    if let Some(overlay) = result.overlay {
        output.kv(
            "Map Overlay",
            format!("score {:.1}, fill {}", overlay.score, overlay.fill_color),
        );
    }

    match &result.estimation {
        Some(estimation) => print_estimation(estimation, output)?,
        None => output.info("The shape encloses no area; nothing selected"),
    }

    Ok(())
}

/// Inline GeoJSON starts with an object brace; anything else is a path
fn read_input(input: &str) -> Result<String> {
    if input.trim_start().starts_with('{') {
        return Ok(input.to_string());
    }

    tracing::debug!(path = input, "Reading GeoJSON file");
    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}
