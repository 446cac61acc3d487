use pvscope_core::error::Result;
use pvscope_core::PvEstimator;
use pvscope_geo::PolygonAreaMeasurer;

use crate::config::ApiConfig;

/// Shared, read-only request context
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub estimator: PvEstimator,
    pub measurer: PolygonAreaMeasurer,
}

impl AppState {
    pub fn new(estimator: PvEstimator, measurer: PolygonAreaMeasurer) -> Self {
        Self { estimator, measurer }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let estimator = PvEstimator::new(config.coefficients()?)?;
        let measurer = PolygonAreaMeasurer::new(config.area_method());
        Ok(Self::new(estimator, measurer))
    }
}
