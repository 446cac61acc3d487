use crate::models::Ring;
use pvscope_core::error::{PvError, Result};

/// Minimum number of distinct positions that can enclose an area
pub const MIN_RING_POSITIONS: usize = 3;

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    /// Convert into a `Result`, reporting the first error
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some(error) => Err(PvError::invalid_geometry(format!(
                "{}: {}",
                error.location, error.reason
            ))),
        }
    }
}

/// Validate a drawn ring.
///
/// Checks position count (ignoring a duplicated closing position) and
/// coordinate finiteness. Out-of-range latitudes and longitudes pass through,
/// as does self-intersection; measuring such a ring fails if its area is not
/// finite.
pub fn validate_ring(ring: &Ring) -> ValidationResult {
    let mut result = ValidationResult::valid();

    let positions = ring.open_coordinates().len();
    if positions < MIN_RING_POSITIONS {
        result.add_error(
            "Ring".to_string(),
            format!(
                "Ring must have at least {} points, found {}",
                MIN_RING_POSITIONS, positions
            ),
        );
    }

    for (i, coord) in ring.coordinates().iter().enumerate() {
        if !coord.is_finite() {
            result.add_error(format!("Ring[{}]", i), "Coordinates must be finite".to_string());
        }
    }

    result
}
