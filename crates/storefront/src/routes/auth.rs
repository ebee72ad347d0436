//! Authentication route handlers.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub repassword: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Handle registration form submission.
///
/// Validates the confirmation password at this boundary; everything else is
/// the auth service's contract.
#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse> {
    if form.password.is_empty() || form.repassword.is_empty() {
        return Err(AppError::BadRequest("Password is required!".to_owned()));
    }
    if form.password != form.repassword {
        return Err(AppError::BadRequest("Passwords do not match!".to_owned()));
    }

    let service = AuthService::new(state.pool());
    let user = service.register(&form.username, &form.password).await?;

    tracing::info!(user_id = %user.id, "user registered");

    let current = CurrentUser {
        id: user.id,
        username: user.username.to_string(),
    };

    Ok((StatusCode::CREATED, Json(current)))
}

/// Handle login form submission.
#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Json<CurrentUser>> {
    let service = AuthService::new(state.pool());
    let user = service.login(&form.username, &form.password).await?;

    let current = CurrentUser {
        id: user.id,
        username: user.username.to_string(),
    };

    // Start from a fresh session on login
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    set_sentry_user(&current.id, Some(&current.username));
    tracing::info!(user_id = %current.id, "user logged in");

    Ok(Json(current))
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    clear_sentry_user();

    Ok(StatusCode::NO_CONTENT)
}
