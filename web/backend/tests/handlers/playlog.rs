use crate::fixtures::test_state;
use axum::Json;
use axum::extract::State;
use serde_json::json;
use vibecurate_web::error::AppError;
use vibecurate_web::handlers::play_log;
use vibecurate_web::models::PlayLogRequest;

fn log(company: Option<&str>, track_id: Option<serde_json::Value>, started_at: Option<&str>) -> PlayLogRequest {
    PlayLogRequest {
        company: company.map(str::to_string),
        track_id,
        started_at: started_at.map(str::to_string),
        ended_at: None,
    }
}

#[tokio::test]
async fn test_play_log_records_entry() {
    let state = test_state(None).await;

    let Json(response) = play_log(
        State(state.clone()),
        Ok(Json(log(Some("Coffee Corner"), Some(json!("1532771")), Some("2026-10-16T09:00:00Z")))),
    )
    .await
    .unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Log recorded successfully");
    assert_eq!(state.store.count_play_logs("Coffee Corner").await.unwrap(), 1);
}

#[tokio::test]
async fn test_play_log_accepts_numeric_track_ids() {
    let state = test_state(None).await;

    play_log(
        State(state.clone()),
        Ok(Json(log(Some("Coffee Corner"), Some(json!(42)), Some("2026-10-16T09:00:00Z")))),
    )
    .await
    .unwrap();

    let stored: String = sqlx::query_scalar("SELECT track_id FROM play_logs")
        .fetch_one(state.store.pool())
        .await
        .unwrap();
    assert_eq!(stored, "42");
}

#[tokio::test]
async fn test_play_log_requires_fields() {
    let state = test_state(None).await;

    let cases = [
        log(None, Some(json!("1")), Some("2026-10-16T09:00:00Z")),
        log(Some("Coffee Corner"), None, Some("2026-10-16T09:00:00Z")),
        log(Some("Coffee Corner"), Some(json!("1")), None),
        log(Some(""), Some(json!("1")), Some("2026-10-16T09:00:00Z")),
        log(Some("Coffee Corner"), Some(json!(null)), Some("2026-10-16T09:00:00Z")),
    ];

    for case in cases {
        let result = play_log(State(state.clone()), Ok(Json(case))).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
    assert_eq!(state.store.count_play_logs("Coffee Corner").await.unwrap(), 0);
}
