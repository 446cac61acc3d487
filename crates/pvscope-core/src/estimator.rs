//! Area to PV metrics conversion

use crate::error::{PvError, Result};
use crate::models::{Potential, PvCoefficients, PvEstimation};

/// Converts a selected ground area into PV metrics.
///
/// Stateless apart from its coefficients; the same area always yields a
/// bit-identical estimation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PvEstimator {
    coefficients: PvCoefficients,
}

impl PvEstimator {
    /// Create an estimator with validated coefficients
    pub fn new(coefficients: PvCoefficients) -> Result<Self> {
        coefficients.validate()?;
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &PvCoefficients {
        &self.coefficients
    }

    /// Estimate PV metrics for an area in square meters.
    ///
    /// Zero is valid and yields an all-zero estimation in the low tier.
    pub fn estimate(&self, area_m2: f64) -> Result<PvEstimation> {
        if !area_m2.is_finite() {
            return Err(PvError::invalid_input(
                "area_m2",
                format!("area must be finite, got {}", area_m2),
            ));
        }
        if area_m2 < 0.0 {
            return Err(PvError::invalid_input(
                "area_m2",
                format!("area must not be negative, got {}", area_m2),
            ));
        }

        let c = &self.coefficients;
        let usable_area = area_m2 * c.usability_factor;
        let installed_capacity = usable_area * c.pv_density;
        let annual_yield = installed_capacity * c.solar_irradiance * c.performance_ratio;
        let co2_savings = annual_yield * c.co2_per_kwh;
        let potential = Potential::classify(installed_capacity, c);

        tracing::debug!(
            area_m2,
            installed_capacity,
            annual_yield,
            potential = %potential,
            "Estimated PV potential"
        );

        Ok(PvEstimation {
            total_area: area_m2,
            usable_area,
            installed_capacity,
            annual_yield,
            co2_savings,
            potential,
        })
    }
}

/// Estimate with the default coefficients
pub fn estimate(area_m2: f64) -> Result<PvEstimation> {
    PvEstimator::default().estimate(area_m2)
}
