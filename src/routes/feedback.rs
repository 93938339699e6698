// src/routes/feedback.rs

use axum::{extract::{Path, State}, http::StatusCode, Json};

use crate::{analytics, models::FeedbackItem, AppState};
use super::{interview_id, internal_error};

/// GET /api/v1/interviews/:interview_id/feedback
pub async fn list_feedback(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<FeedbackItem>>, (StatusCode, String)> {
    let id = interview_id(raw_id)?;
    let rows = state.store.fetch_for_interview(&id).await.map_err(internal_error)?;
    Ok(Json(analytics::feedback_items(rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{tests::record, Tier};
    use crate::routes::test_support::{state_with, store_with, MemoryStore};

    #[tokio::test]
    async fn lists_rows_in_row_id_order() {
        let store = store_with(
            "mock-1",
            vec![record(30, "third", Some("4")), record(5, "first", Some("9/10"))],
        );
        let Json(items) = list_feedback(State(state_with(store)), Path("mock-1".into()))
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].record.question, "first");
        assert_eq!(items[0].index, 1);
        assert_eq!(items[0].tier, Tier::Excellent);
        assert_eq!(items[1].record.id, 30);
        assert_eq!(items[1].rating_value, 4.0);
    }

    #[tokio::test]
    async fn unknown_interview_is_an_empty_list() {
        let Json(items) = list_feedback(State(state_with(MemoryStore::default())), Path("nope".into()))
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_internal_error() {
        let store = MemoryStore { fail: true, ..Default::default() };
        let (status, body) = list_feedback(State(state_with(store)), Path("mock-1".into()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("connection refused"));
    }

    #[tokio::test]
    async fn item_json_flattens_the_record() {
        let store = store_with("mock-1", vec![record(1, "q", Some("6"))]);
        let Json(items) = list_feedback(State(state_with(store)), Path("mock-1".into()))
            .await
            .unwrap();

        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["question"], "q");
        assert_eq!(json["rating"], "6");
        assert_eq!(json["rating_value"], 6.0);
        assert_eq!(json["tier"], "good");
    }
}
