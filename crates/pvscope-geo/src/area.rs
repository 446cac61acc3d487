//! Surface area of drawn rings
//!
//! Areas are computed directly from latitude/longitude; callers never
//! project. The geodesic method follows Karney's algorithm on the WGS84
//! ellipsoid. The spherical method is the Chamberlain-Duquette
//! approximation on a sphere of equatorial radius, which is what browser
//! drawing tools typically report.

use geo::{ChamberlainDuquetteArea, GeodesicArea};
use pvscope_core::error::{PvError, Result};
use pvscope_core::ports::AreaMeasurer;

use crate::models::{AreaMethod, Ring, RingExt};
use crate::validation::validate_ring;

/// Measures rings with a fixed algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolygonAreaMeasurer {
    method: AreaMethod,
}

impl PolygonAreaMeasurer {
    pub fn new(method: AreaMethod) -> Self {
        Self { method }
    }

    pub fn geodesic() -> Self {
        Self::new(AreaMethod::Geodesic)
    }

    pub fn spherical() -> Self {
        Self::new(AreaMethod::Spherical)
    }
}

impl AreaMeasurer for PolygonAreaMeasurer {
    fn measure_area(&self, ring: &Ring) -> Result<f64> {
        validate_ring(ring).into_result()?;

        let polygon = ring.to_geo();
        let area = match self.method {
            // Unsigned assumes counter-clockwise winding; drawn rings may be either
            AreaMethod::Geodesic => polygon.geodesic_area_signed().abs(),
            AreaMethod::Spherical => polygon.chamberlain_duquette_unsigned_area(),
        };

        // Out-of-range latitudes pass validation but have no surface area
        if !area.is_finite() {
            return Err(PvError::invalid_geometry(format!(
                "Ring area is not a finite number ({}); check that latitudes are within ±90°",
                area
            )));
        }

        tracing::debug!(method = %self.method, positions = ring.len(), area_m2 = area, "Measured ring");
        Ok(area)
    }

    fn method(&self) -> AreaMethod {
        self.method
    }
}

/// Geodesic area of a ring in square meters
pub fn measure_area(ring: &Ring) -> Result<f64> {
    PolygonAreaMeasurer::geodesic().measure_area(ring)
}
