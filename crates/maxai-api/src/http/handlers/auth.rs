//! Account HTTP handlers.
//!
//! Endpoints:
//! - POST /api/v1/auth/register - Create an account and log in
//! - POST /api/v1/auth/login    - Exchange credentials for a session token
//! - POST /api/v1/auth/logout   - End the caller's session

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use maxai_types::user::IssuedSession;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Second copy of the password; checked when present.
    #[serde(default, alias = "password2")]
    pub password_confirmation: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/v1/auth/register - Create a regular user and start a session.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<IssuedSession>>, AppError> {
    let timer = RequestTimer::start();

    let issued = state
        .account_service
        .register(
            &body.username,
            &body.password,
            body.password_confirmation.as_deref(),
        )
        .await?;

    Ok(Json(
        timer
            .respond(issued)
            .with_link("query", "/api/v1/query")
            .with_link("history", "/api/v1/history"),
    ))
}

/// POST /api/v1/auth/login - Check credentials and start a session.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<IssuedSession>>, AppError> {
    let timer = RequestTimer::start();

    let issued = state
        .account_service
        .login(&body.username, &body.password)
        .await?;

    Ok(Json(
        timer
            .respond(issued)
            .with_link("query", "/api/v1/query")
            .with_link("history", "/api/v1/history"),
    ))
}

/// POST /api/v1/auth/logout - Delete the session behind the presented token.
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    state.account_service.logout(&current.token).await?;

    Ok(Json(
        timer
            .respond(serde_json::json!({ "logged_out": true }))
            .with_link("login", "/api/v1/auth/login"),
    ))
}
