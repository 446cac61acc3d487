use pvscope_core::config::ConfigSource;
use pvscope_core::export::{AreaBreakdown, EstimationExport, MapOverlay};
use pvscope_core::{AreaMethod, Bounds, Coordinate, PvEstimation};
use serde::Serialize;
use tabled::Tabled;

/// Output for estimate command
#[derive(Debug, Serialize)]
pub struct EstimateOutput {
    pub estimation: PvEstimation,
    pub formatted: EstimationExport,
    pub color: &'static str,
}

impl From<PvEstimation> for EstimateOutput {
    fn from(estimation: PvEstimation) -> Self {
        Self {
            formatted: EstimationExport::from(&estimation),
            color: estimation.potential.color(),
            estimation,
        }
    }
}

/// Output for measure command
#[derive(Debug, Serialize)]
pub struct MeasureOutput {
    pub method: AreaMethod,
    pub area_m2: f64,
    pub bounds: Option<Bounds>,
    pub centroid: Option<Coordinate>,
    pub estimation: Option<EstimateOutput>,
    pub overlay: Option<MapOverlay>,
}

/// Output for export command
#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub path: String,
    pub export: EstimationExport,
}

/// One effective configuration value
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, source: ConfigSource) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source: format!("{:?}", source),
        }
    }
}

/// Row of the area breakdown table
#[derive(Debug, Serialize, Tabled)]
pub struct BreakdownRow {
    #[tabled(rename = "Chart")]
    pub chart: &'static str,
    #[tabled(rename = "Series")]
    pub name: &'static str,
    #[tabled(rename = "Area (m²)")]
    pub value: String,
}

impl BreakdownRow {
    pub fn rows(breakdown: &AreaBreakdown) -> Vec<Self> {
        let bars = breakdown.bars.iter().map(|point| ("bar", point));
        let pie = breakdown.pie.iter().map(|point| ("pie", point));

        bars.chain(pie)
            .map(|(chart, point)| Self {
                chart,
                name: point.name,
                value: format!("{:.2}", point.value),
            })
            .collect()
    }
}
