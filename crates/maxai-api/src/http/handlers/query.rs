//! Query submission handler.
//!
//! POST /api/v1/query - Classify one query and act on it.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use maxai_types::query::QueryOutcome;
use maxai_types::search::SearchMode;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Request body for a query submission.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Missing and blank queries are rejected by the service.
    #[serde(default)]
    pub query: String,
    /// `images` selects image search; anything else, or nothing, is web.
    #[serde(default)]
    pub search_type: Option<String>,
}

impl QueryRequest {
    fn mode(&self) -> SearchMode {
        match self.search_type.as_deref() {
            None => SearchMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|reason: String| {
                tracing::debug!(%reason, "unrecognized search type, using web");
                SearchMode::Web
            }),
        }
    }
}

/// POST /api/v1/query - Submit a query for the calling user.
///
/// Returns the [`QueryOutcome`]: a chat reply, a special-content tag, a
/// redirect target, or search results with a summary.
pub async fn submit_query(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(body): Json<QueryRequest>,
) -> Result<Json<ApiResponse<QueryOutcome>>, AppError> {
    let timer = RequestTimer::start();
    let mode = body.mode();
    tracing::debug!(request_id = timer.request_id(), user_id = %current.user.id, %mode, "query received");

    let outcome = state
        .query_service
        .submit(&current.user.id, &body.query, mode)
        .await?;

    let redirect = match &outcome {
        QueryOutcome::Redirect { url, .. } => Some(url.clone()),
        _ => None,
    };
    let mut response = timer.respond(outcome).with_link("history", "/api/v1/history");
    if let Some(url) = redirect {
        response = response.with_link("redirect", &url);
    }

    Ok(Json(response))
}
