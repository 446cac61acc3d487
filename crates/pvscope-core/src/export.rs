//! Downloadable and chartable views of an estimation

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{format_area, format_capacity, format_co2, format_energy};
use crate::models::{Potential, PvEstimation};

/// File name offered for the JSON download
pub const EXPORT_FILE_NAME: &str = "pv-estimation.json";

/// Human-readable estimation record, as written to the export file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationExport {
    pub total_area: String,
    pub usable_area: String,
    pub installed_capacity: String,
    pub annual_yield: String,
    pub co2_savings: String,
    pub potential: Potential,
}

impl EstimationExport {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&PvEstimation> for EstimationExport {
    fn from(estimation: &PvEstimation) -> Self {
        Self {
            total_area: format_area(estimation.total_area),
            usable_area: format_area(estimation.usable_area),
            installed_capacity: format_capacity(estimation.installed_capacity),
            annual_yield: format_energy(estimation.annual_yield),
            co2_savings: format_co2(estimation.co2_savings),
            potential: estimation.potential,
        }
    }
}

/// Fill opacity of a tinted shape on the map
pub const OVERLAY_FILL_OPACITY: f64 = 0.4;

/// Map styling for a drawn shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOverlay {
    pub score: f64,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

impl From<&PvEstimation> for MapOverlay {
    fn from(estimation: &PvEstimation) -> Self {
        Self {
            score: estimation.overlay_score(),
            fill_color: estimation.overlay_color(),
            fill_opacity: OVERLAY_FILL_OPACITY,
        }
    }
}

/// A labelled value in a chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: f64,
}

/// Area chart series derived from an estimation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaBreakdown {
    /// Total versus usable area
    pub bars: Vec<ChartPoint>,
    /// Usable versus unusable share of the total
    pub pie: Vec<ChartPoint>,
}

impl From<&PvEstimation> for AreaBreakdown {
    fn from(estimation: &PvEstimation) -> Self {
        Self {
            bars: vec![
                ChartPoint { name: "Total Area", value: estimation.total_area },
                ChartPoint { name: "Usable Area", value: estimation.usable_area },
            ],
            pie: vec![
                ChartPoint { name: "Usable", value: estimation.usable_area },
                ChartPoint {
                    name: "Unusable",
                    value: estimation.total_area - estimation.usable_area,
                },
            ],
        }
    }
}
