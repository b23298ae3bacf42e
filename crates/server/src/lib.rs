//! Menuboard Server - menu availability publishing service.
//!
//! An administrator marks which items from a fixed menu catalog are
//! currently available; the public API exposes that live subset with a
//! last-updated timestamp as the freshness signal.
//!
//! # Architecture
//!
//! - Axum web framework, single process
//! - The menu catalog is an external read-only JSON document, re-read on
//!   every query
//! - The availability record is a single JSON document replaced atomically
//!   (tmp file + rename) on every admin save; last writer wins
//! - One shared admin credential pair, session-backed, gates the mutation
//!
//! No record state is cached between requests: public readers always see
//! the most recently completed write.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the application router.
///
/// Exposed so integration tests can serve the exact production router on an
/// ephemeral port.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(middleware::create_session_layer())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
