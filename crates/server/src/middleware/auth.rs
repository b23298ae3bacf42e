//! Admin authentication extractor.
//!
//! Provides the extractor that gates the admin view and the availability
//! mutation. There is a single shared admin identity; authorization is one
//! boolean session flag, not a user/role graph.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;

/// Session key holding the admin flag.
pub const ADMIN_SESSION_KEY: &str = "admin";

/// Extractor that requires an authenticated admin session.
///
/// Rejects with `AppError::Unauthorized` (401) so the client can route the
/// caller to the credential-entry flow; storage failures surface differently.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_: RequireAdmin) -> impl IntoResponse {
///     StatusCode::NO_CONTENT
/// }
/// ```
pub struct RequireAdmin;

/// Whether the session carries a valid admin login.
pub async fn is_admin(session: &Session) -> bool {
    session
        .get::<bool>(ADMIN_SESSION_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The session is placed in extensions by SessionManagerLayer.
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AppError::Unauthorized)?;

        if is_admin(session).await {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
