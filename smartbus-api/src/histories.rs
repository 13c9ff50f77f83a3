use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use smartbus_shared::models::HistoryPoint;
use tracing::warn;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/histories/{passenger_id}", get(passenger_history))
}

/// GET /histories/{passenger_id}
/// Never fails: the allocator falls back to defaults when there is no history.
async fn passenger_history(
    State(state): State<AppState>,
    Path(passenger_id): Path<String>,
) -> Json<Vec<HistoryPoint>> {
    match state.history_repo.find_by_passenger(&passenger_id).await {
        Ok(rows) => Json(rows.iter().map(HistoryPoint::from).collect()),
        Err(e) => {
            warn!("History lookup for {} failed, answering empty: {}", passenger_id, e);
            Json(Vec::new())
        }
    }
}
