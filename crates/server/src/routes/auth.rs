//! Login and logout for the shared admin credential pair.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::auth::ADMIN_SESSION_KEY;
use crate::state::AppState;

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /admin/login` - establish an admin session.
///
/// Compares the submitted pair against the configured credentials; a match
/// sets the admin flag on the session, anything else is `Unauthorized`.
pub async fn login(
    session: Session,
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<StatusCode> {
    if !state
        .config()
        .verify_credentials(&request.username, &request.password)
    {
        tracing::warn!(username = %request.username, "Failed admin login attempt");
        return Err(AppError::Unauthorized);
    }

    session.insert(ADMIN_SESSION_KEY, true).await?;
    tracing::info!("Admin logged in");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /admin/logout` - clear the admin session.
pub async fn logout(session: Session) -> Result<StatusCode> {
    session.flush().await?;
    Ok(StatusCode::NO_CONTENT)
}
