//! Area selection state driven by drawing events.
//!
//! The drawing surface emits a created event with the finished ring, or a
//! deleted event when the shape is removed. The state holds the estimation
//! for the current selection, or nothing at all when no area is selected.

use serde::Serialize;

use crate::error::{PvError, Result};
use crate::estimator::PvEstimator;
use crate::models::{Bounds, PvEstimation, Ring};
use crate::ports::AreaMeasurer;

/// Event emitted by the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// A polygon or rectangle was completed
    Created(Ring),
    /// The drawn shape was removed
    Deleted,
}

/// A measured and estimated selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaSelection {
    pub area_m2: f64,
    pub bounds: Bounds,
    pub estimation: PvEstimation,
}

/// Current selection of a view, replaced on each drawing event
#[derive(Debug)]
pub struct AreaSelectionState<M> {
    measurer: M,
    estimator: PvEstimator,
    current: Option<AreaSelection>,
}

impl<M: AreaMeasurer> AreaSelectionState<M> {
    pub fn new(measurer: M, estimator: PvEstimator) -> Self {
        Self { measurer, estimator, current: None }
    }

    pub fn current(&self) -> Option<&AreaSelection> {
        self.current.as_ref()
    }

    pub fn estimation(&self) -> Option<&PvEstimation> {
        self.current.as_ref().map(|s| &s.estimation)
    }

    /// Apply a drawing event.
    ///
    /// An invalid ring clears the selection before the error is returned, so
    /// the view falls back to "nothing selected". A zero-area ring also
    /// clears it.
    pub fn handle(&mut self, event: DrawEvent) -> Result<Option<&AreaSelection>> {
        match event {
            DrawEvent::Created(ring) => {
                self.current = None;
                self.current = self.select(&ring)?;
            }
            DrawEvent::Deleted => {
                tracing::debug!("Selection cleared");
                self.current = None;
            }
        }
        Ok(self.current.as_ref())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    fn select(&self, ring: &Ring) -> Result<Option<AreaSelection>> {
        let area_m2 = self.measurer.measure_area(ring)?;
        if area_m2 <= 0.0 {
            tracing::debug!(method = %self.measurer.method(), "Degenerate ring, nothing selected");
            return Ok(None);
        }

        let bounds = ring
            .bounds()
            .ok_or_else(|| PvError::invalid_geometry("Ring has no coordinates"))?;
        let estimation = self.estimator.estimate(area_m2)?;

        tracing::debug!(
            area_m2,
            method = %self.measurer.method(),
            potential = %estimation.potential,
            "Area selected"
        );

        Ok(Some(AreaSelection { area_m2, bounds, estimation }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaMethod, Coordinate, Potential};

    /// Reports a fixed area for any ring with at least three points
    struct FixedMeasurer(f64);

    impl AreaMeasurer for FixedMeasurer {
        fn measure_area(&self, ring: &Ring) -> Result<f64> {
            if ring.open_coordinates().len() < 3 {
                return Err(PvError::invalid_geometry("too few points"));
            }
            Ok(self.0)
        }

        fn method(&self) -> AreaMethod {
            AreaMethod::Geodesic
        }
    }

    fn triangle() -> Ring {
        Ring::new(vec![
            Coordinate::new(40.0, -74.0),
            Coordinate::new(40.001, -74.0),
            Coordinate::new(40.0, -73.999),
        ])
    }

    #[test]
    fn test_starts_empty() {
        let state = AreaSelectionState::new(FixedMeasurer(100.0), PvEstimator::default());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_created_event_selects_area() {
        let mut state = AreaSelectionState::new(FixedMeasurer(1000.0), PvEstimator::default());
        let selection = *state.handle(DrawEvent::Created(triangle())).unwrap().unwrap();

        assert_eq!(selection.area_m2, 1000.0);
        assert_eq!(selection.estimation.total_area, 1000.0);
        assert_eq!(selection.estimation.potential, Potential::High);
        assert_eq!(selection.bounds.max_lat, 40.001);
    }

    #[test]
    fn test_deleted_event_clears_selection() {
        let mut state = AreaSelectionState::new(FixedMeasurer(1000.0), PvEstimator::default());
        state.handle(DrawEvent::Created(triangle())).unwrap();
        assert!(state.estimation().is_some());

        let after = state.handle(DrawEvent::Deleted).unwrap();
        assert!(after.is_none());
        assert!(state.estimation().is_none());
    }

    #[test]
    fn test_zero_area_is_absent_not_zeroed() {
        let mut state = AreaSelectionState::new(FixedMeasurer(0.0), PvEstimator::default());
        let result = state.handle(DrawEvent::Created(triangle())).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ring_resets_selection() {
        let mut state = AreaSelectionState::new(FixedMeasurer(500.0), PvEstimator::default());
        state.handle(DrawEvent::Created(triangle())).unwrap();

        let two_points = Ring::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]);
        let err = state.handle(DrawEvent::Created(two_points)).unwrap_err();

        assert!(matches!(err, PvError::InvalidGeometry { .. }));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let mut state = AreaSelectionState::new(FixedMeasurer(100.0), PvEstimator::default());
        state.handle(DrawEvent::Created(triangle())).unwrap();
        let first = *state.current().unwrap();

        state.measurer = FixedMeasurer(200.0);
        state.handle(DrawEvent::Created(triangle())).unwrap();
        let second = *state.current().unwrap();

        assert_eq!(first.area_m2, 100.0);
        assert_eq!(second.area_m2, 200.0);
    }
}
