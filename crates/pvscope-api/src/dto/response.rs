use pvscope_core::export::{AreaBreakdown, EstimationExport, MapOverlay};
use pvscope_core::{AreaMethod, Bounds, Coordinate, PvEstimation};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "pvscope-api" }
    }
}

/// Estimation with display-ready values for KPI tiles and charts
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub estimation: PvEstimation,
    pub formatted: EstimationExport,
    pub color: &'static str,
    pub breakdown: AreaBreakdown,
}

impl From<PvEstimation> for EstimateResponse {
    fn from(estimation: PvEstimation) -> Self {
        Self {
            formatted: EstimationExport::from(&estimation),
            color: estimation.potential.color(),
            breakdown: AreaBreakdown::from(&estimation),
            estimation,
        }
    }
}

/// Measurement of a drawn shape.
///
/// `estimation` and `overlay` are absent when the shape encloses no area.
#[derive(Debug, Serialize)]
pub struct MeasureResponse {
    pub method: AreaMethod,
    pub area_m2: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Coordinate>,
    pub estimation: Option<EstimateResponse>,
    pub overlay: Option<MapOverlay>,
}
