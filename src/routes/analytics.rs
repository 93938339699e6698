// src/routes/analytics.rs

use axum::{extract::{Path, State}, http::StatusCode, Json};
use chrono::Utc;

use crate::{models::AnalyticsReport, AppState};
use super::{interview_id, internal_error};

/// GET /api/v1/interviews/:interview_id/analytics
///
/// `analytics` is `null` when the interview has no feedback rows yet.
pub async fn get_analytics(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<AnalyticsReport>, (StatusCode, String)> {
    let id = interview_id(raw_id)?;
    let rows = state.store.fetch_for_interview(&id).await.map_err(internal_error)?;

    let analytics = state.cache.get_or_derive(&id, &rows);

    Ok(Json(AnalyticsReport {
        interview_id: id,
        generated_at: Utc::now(),
        analytics,
    }))
}
