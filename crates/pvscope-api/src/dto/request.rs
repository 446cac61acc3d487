use serde::Deserialize;

/// Estimate and export request body
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub area_m2: f64,
}
