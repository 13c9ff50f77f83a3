use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Query, State,
    },
    routing::get,
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use smartbus_core::feedback::history_from_feedback;
use smartbus_core::training::build_training_export;
use smartbus_shared::models::{FeedbackRequest, FeedbackStored, TrainingExport};
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/feedback", get(export_training_data).post(submit_feedback))
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Only rows created on or after this UTC date.
    pub since: Option<NaiveDate>,
}

/// POST /feedback
async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackStored>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;

    let record = history_from_feedback(&req, Utc::now())?;
    state
        .history_repo
        .append(&record)
        .await
        .map_err(|e| AppError::StorageError(e.to_string()))?;

    info!(
        "Stored feedback {} for passenger {} at {}",
        record.feedback_score, record.passenger_id, req.seat_label
    );

    Ok(Json(FeedbackStored {
        status: "stored".to_string(),
        passenger_id: record.passenger_id,
        norm_row: record.norm_row,
        norm_col: record.norm_col,
    }))
}

/// GET /feedback
/// Training sets for the allocator. A storage failure yields empty sets so it can fall
/// back to synthetic data.
async fn export_training_data(
    State(state): State<AppState>,
    params: Result<Query<ExportParams>, QueryRejection>,
) -> Result<Json<TrainingExport>, AppError> {
    let Query(params) = params.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let since = params
        .since
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc());

    match state.history_repo.list_all(since).await {
        Ok(rows) => Ok(Json(build_training_export(&rows))),
        Err(e) => {
            warn!("Reading history for training export failed, answering empty: {}", e);
            Ok(Json(TrainingExport::empty()))
        }
    }
}
