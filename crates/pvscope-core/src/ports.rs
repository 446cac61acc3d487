//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

use crate::error::Result;
use crate::models::{AreaMethod, Ring};

/// Port for measuring the surface area of a drawn ring
pub trait AreaMeasurer {
    /// Area enclosed by the ring in square meters
    fn measure_area(&self, ring: &Ring) -> Result<f64>;

    /// Algorithm this measurer applies
    fn method(&self) -> AreaMethod;
}

impl<T: AreaMeasurer + ?Sized> AreaMeasurer for &T {
    fn measure_area(&self, ring: &Ring) -> Result<f64> {
        (**self).measure_area(ring)
    }

    fn method(&self) -> AreaMethod {
        (**self).method()
    }
}
