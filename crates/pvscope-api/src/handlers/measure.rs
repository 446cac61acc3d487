use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use pvscope_core::export::MapOverlay;
use pvscope_core::ports::AreaMeasurer;
use pvscope_core::selection::{AreaSelectionState, DrawEvent};
use pvscope_geo::models::RingExt;
use pvscope_geo::ring_from_value;

use crate::dto::{EstimateResponse, MeasureResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Measure a drawn GeoJSON shape and estimate its PV potential
pub async fn handle_measure(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<MeasureResponse>, ApiError> {
    let Json(body) = payload?;
    let ring = ring_from_value(body)?;
    let centroid = ring.centroid();

    tracing::info!(positions = ring.len(), method = %state.measurer.method(), "Processing measure request");

    let mut selection_state = AreaSelectionState::new(state.measurer, state.estimator);
    let selection = selection_state.handle(DrawEvent::Created(ring))?.copied();

    Ok(Json(MeasureResponse {
        method: state.measurer.method(),
        area_m2: selection.map(|s| s.area_m2).unwrap_or(0.0),
        bounds: selection.map(|s| s.bounds),
        centroid,
        estimation: selection.map(|s| EstimateResponse::from(s.estimation)),
        overlay: selection.map(|s| MapOverlay::from(&s.estimation)),
    }))
}
