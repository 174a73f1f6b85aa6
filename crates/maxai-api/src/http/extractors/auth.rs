//! Session token authentication extractors.
//!
//! Extracts the session token from:
//! - `Authorization: Bearer <token>` header
//! - `X-Session-Token: <token>` header
//!
//! Tokens are resolved to a user through the account service, which compares
//! SHA-256 hashes against the `sessions` table.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use maxai_types::user::User;

use crate::http::error::AppError;
use crate::state::AppState;

/// Header carrying the session token when `Authorization` is not used.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// The logged-in user making the request.
pub struct CurrentUser {
    pub user: User,
    /// Plaintext token, kept so logout can end this exact session.
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers)?;
        let user = state.account_service.authenticate(&token).await?;
        Ok(CurrentUser { user, token })
    }
}

/// A logged-in user with the superuser flag set.
pub struct SuperUser(pub User);

impl FromRequestParts<AppState> for SuperUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser { user, .. } = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_superuser {
            tracing::debug!(user_id = %user.id, "non-superuser denied admin access");
            return Err(AppError::Forbidden(
                "This page is only available to superusers.".to_string(),
            ));
        }
        Ok(SuperUser(user))
    }
}

/// Extract the session token from request headers.
pub fn extract_session_token(headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(auth) = headers.get("authorization") {
        let auth_str = auth.to_str().map_err(|_| {
            AppError::Unauthorized("Invalid Authorization header encoding".to_string())
        })?;
        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            let token = token.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
    }

    if let Some(token) = headers.get(SESSION_TOKEN_HEADER) {
        let token_str = token.to_str().map_err(|_| {
            AppError::Unauthorized("Invalid X-Session-Token header encoding".to_string())
        })?;
        let token_str = token_str.trim();
        if !token_str.is_empty() {
            return Ok(token_str.to_string());
        }
    }

    Err(AppError::Unauthorized(
        "Missing session token. Log in and send it via 'Authorization: Bearer <token>' or 'X-Session-Token: <token>' header.".to_string(),
    ))
}
