use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use pvscope_core::export::{EstimationExport, EXPORT_FILE_NAME};

use crate::dto::{EstimateRequest, EstimateResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn handle_estimate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::info!(area_m2 = request.area_m2, "Processing estimate request");

    let estimation = state.estimator.estimate(request.area_m2)?;

    Ok(Json(EstimateResponse::from(estimation)))
}

/// Estimation as a downloadable JSON file
pub async fn handle_export(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    tracing::info!(area_m2 = request.area_m2, "Processing export request");

    let estimation = state.estimator.estimate(request.area_m2)?;
    let body = EstimationExport::from(&estimation).to_pretty_json()?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
