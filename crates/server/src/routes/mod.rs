//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//!
//! # Public (unauthenticated)
//! GET  /api/menu                   - Full menu catalog
//! GET  /api/available-items        - Availability record {availableItems, lastUpdated}
//! GET  /api/public-view            - Available items grouped by category, sorted by name
//!
//! # Auth
//! POST /admin/login                - Log in with the shared admin credentials
//! POST /admin/logout               - Clear the admin session
//!
//! # Admin (requires session)
//! GET  /api/admin-view             - Every catalog item with its checkbox state
//! POST /api/update-availability    - Replace the whole availability set
//! ```

pub mod admin;
pub mod auth;
pub mod public;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/menu", get(public::menu))
        .route("/api/available-items", get(public::available_items))
        .route("/api/public-view", get(public::public_view))
        .route("/api/admin-view", get(admin::admin_view))
        .route("/api/update-availability", post(admin::update_availability))
        .route("/admin/login", post(auth::login))
        .route("/admin/logout", post(auth::logout))
}
