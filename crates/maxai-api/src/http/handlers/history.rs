//! Search history handlers.
//!
//! Endpoints:
//! - GET  /api/v1/history       - Caller's most recent queries
//! - POST /api/v1/history/clear - Delete all of the caller's history

use axum::Json;
use axum::extract::State;

use maxai_types::history::SearchHistoryEntry;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/history - Most recent queries, newest first.
pub async fn list_history(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<Vec<SearchHistoryEntry>>>, AppError> {
    let timer = RequestTimer::start();

    let entries = state.query_service.recent_history(&current.user.id).await?;

    Ok(Json(
        timer
            .respond(entries)
            .with_link("self", "/api/v1/history")
            .with_link("clear", "/api/v1/history/clear"),
    ))
}

/// POST /api/v1/history/clear - Delete the caller's history.
pub async fn clear_history(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    let deleted = state.query_service.clear_history(&current.user.id).await?;

    Ok(Json(timer.respond(serde_json::json!({
        "deleted": deleted,
        "message": "Search history cleared!",
    }))))
}
