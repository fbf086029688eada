use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::models::AugmentedResponse;

use super::AppState;
use super::models::{CrawlRequest, WaitParams};

pub async fn crawl_handler(
    State(state): State<AppState>,
    Json(request): Json<CrawlRequest>,
) -> Result<Json<AugmentedResponse>, (StatusCode, String)> {
    let params = request.params(&state.defaults);
    let response = state
        .pipeline
        .crawl(request.response, &params)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Crawl error: {}", e),
            )
        })?;
    Ok(Json(response))
}

pub async fn push_response_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(response): Json<Value>,
) -> StatusCode {
    state.queue.push_response(&session_id, response);
    StatusCode::NO_CONTENT
}

pub async fn wait_for_response_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(params): Query<WaitParams>,
) -> Result<Json<Value>, StatusCode> {
    match state.queue.wait_for_response(&session_id, params.timeout).await {
        Some(response) => Ok(Json(response)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

pub async fn clear_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    state.queue.clear_session(&session_id);
    StatusCode::NO_CONTENT
}
