//! POST /api/v1/chat/new - Start a fresh chat. Chats hold no server state,
//! so this only acknowledges the request.

use axum::Json;
use axum::extract::State;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

pub async fn new_chat(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();
    tracing::debug!(user_id = %current.user.id, "new chat");

    Ok(Json(
        timer
            .respond(serde_json::json!({ "message": state.query_service.new_chat() }))
            .with_link("query", "/api/v1/query"),
    ))
}
