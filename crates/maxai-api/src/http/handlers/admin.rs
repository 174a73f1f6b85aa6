//! Admin dashboard endpoint.
//!
//! GET /api/v1/admin/dashboard - Site-wide totals for superusers.

use axum::Json;
use axum::extract::State;

use maxai_types::history::AdminDashboard;

use crate::http::error::AppError;
use crate::http::extractors::auth::SuperUser;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/admin/dashboard - Aggregate dashboard statistics.
///
/// Returns total users and searches, every user with their search count
/// (users without searches included), and the latest searches across all
/// users with the searcher's username.
pub async fn get_dashboard(
    State(state): State<AppState>,
    SuperUser(admin): SuperUser,
) -> Result<Json<ApiResponse<AdminDashboard>>, AppError> {
    let timer = RequestTimer::start();

    let dashboard = state
        .query_service
        .dashboard(state.account_service.users())
        .await?;
    tracing::debug!(admin_id = %admin.id, total_searches = dashboard.total_searches, "dashboard served");

    Ok(Json(timer.respond(dashboard)))
}
