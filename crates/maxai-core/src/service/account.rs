//! Account registration, login, and session authentication.

use chrono::Utc;
use maxai_types::error::{AccountError, RepositoryError};
use maxai_types::user::{IssuedSession, Session, User};
use tracing::{debug, info};
use uuid::Uuid;

use crate::repository::user::{SessionRepository, UserRepository};
use crate::service::hash::{PasswordHasher, SessionTokens};

pub const MAX_USERNAME_LEN: usize = 150;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Letters, digits and `@ . + - _`, 1 to 150 characters.
pub fn validate_username(username: &str) -> Result<(), AccountError> {
    if username.is_empty() {
        return Err(AccountError::InvalidUsername(
            "username cannot be empty".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AccountError::InvalidUsername(format!(
            "username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }
    if let Some(bad) = username
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')))
    {
        return Err(AccountError::InvalidUsername(format!(
            "'{bad}' is not allowed; use letters, digits and @/./+/-/_"
        )));
    }
    Ok(())
}

/// At least eight characters; must equal `confirmation` when one is given.
pub fn validate_password(password: &str, confirmation: Option<&str>) -> Result<(), AccountError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::InvalidPassword(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if let Some(confirmation) = confirmation {
        if confirmation != password {
            return Err(AccountError::InvalidPassword(
                "the two password fields didn't match".to_string(),
            ));
        }
    }
    Ok(())
}

/// Service owning users and their login sessions.
pub struct AccountService<U, S, P, T>
where
    U: UserRepository,
    S: SessionRepository,
    P: PasswordHasher,
    T: SessionTokens,
{
    users: U,
    sessions: S,
    passwords: P,
    tokens: T,
}

impl<U, S, P, T> AccountService<U, S, P, T>
where
    U: UserRepository,
    S: SessionRepository,
    P: PasswordHasher,
    T: SessionTokens,
{
    pub fn new(users: U, sessions: S, passwords: P, tokens: T) -> Self {
        Self {
            users,
            sessions,
            passwords,
            tokens,
        }
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    /// Create a user without logging them in.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        is_superuser: bool,
    ) -> Result<User, AccountError> {
        let username = username.trim();
        validate_username(username)?;
        validate_password(password, None)?;

        if self.users.get_user_by_username(username).await?.is_some() {
            return Err(AccountError::UsernameTaken(username.to_string()));
        }

        let user = User {
            id: Uuid::now_v7(),
            username: username.to_string(),
            password_hash: self.passwords.hash_password(password)?,
            is_superuser,
            created_at: Utc::now(),
        };

        // A concurrent registration can still win the unique index.
        self.users.create_user(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AccountError::UsernameTaken(user.username.clone()),
            other => AccountError::Storage(other),
        })?;

        info!(user_id = %user.id, username = %user.username, is_superuser, "user created");
        Ok(user)
    }

    /// Register a regular user and start a session for them.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirmation: Option<&str>,
    ) -> Result<IssuedSession, AccountError> {
        validate_password(password, confirmation)?;
        let user = self.create_user(username, password, false).await?;
        self.issue_session(user).await
    }

    /// Check credentials and start a session.
    ///
    /// Unknown users and wrong passwords produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AccountError> {
        let user = self
            .users
            .get_user_by_username(username.trim())
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !self.passwords.verify_password(password, &user.password_hash) {
            debug!(user_id = %user.id, "password mismatch");
            return Err(AccountError::InvalidCredentials);
        }

        self.issue_session(user).await
    }

    /// End the session the token belongs to. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AccountError> {
        let removed = self
            .sessions
            .delete_session(&self.tokens.hash_token(token))
            .await?;
        debug!(removed, "logout");
        Ok(())
    }

    /// Resolve a bearer token to its user.
    pub async fn authenticate(&self, token: &str) -> Result<User, AccountError> {
        let session = self
            .sessions
            .touch_session(&self.tokens.hash_token(token))
            .await?
            .ok_or(AccountError::InvalidSession)?;

        self.users
            .get_user(&session.user_id)
            .await?
            .ok_or(AccountError::InvalidSession)
    }

    async fn issue_session(&self, user: User) -> Result<IssuedSession, AccountError> {
        let token = self.tokens.generate_token();
        let session = Session {
            id: Uuid::now_v7(),
            user_id: user.id,
            token_hash: self.tokens.hash_token(&token),
            created_at: Utc::now(),
            last_used_at: None,
        };
        self.sessions.create_session(&session).await?;
        info!(user_id = %user.id, "session started");
        Ok(IssuedSession { token, user })
    }
}
