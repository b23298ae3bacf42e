//! Unified error handling for route handlers.
//!
//! Provides the `AppError` type that all handlers return. Variants are
//! distinct per failure kind so callers can react: `Unauthorized` in
//! particular must be distinguishable from storage failures so a client can
//! redirect to a credential-entry flow instead of showing a generic error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::store::StoreError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// The external menu source could not be loaded or parsed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The availability record could not be read, parsed, or written.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Session state could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Caller is not an authenticated admin.
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Catalog(_) | Self::Store(_) | Self::Session(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Catalog(_) | Self::Store(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose file paths or parser detail to clients. The bodies
        // match the original wire contract.
        let message = match &self {
            Self::Catalog(_) => "Error loading menu.".to_string(),
            Self::Store(err) => match err {
                StoreError::Read { .. } | StoreError::Corrupt { .. } => {
                    "Error loading available items.".to_string()
                }
                StoreError::Write { .. } => "Error updating availability.".to_string(),
            },
            Self::Session(_) => "Internal server error".to_string(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
