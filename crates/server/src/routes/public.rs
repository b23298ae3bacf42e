//! Public route handlers: catalog, availability record, and the composed
//! public view. All unauthenticated.

use axum::{Json, extract::State};
use menuboard_core::{AvailabilityRecord, Catalog, PublicCategory, view};

use crate::error::Result;
use crate::state::AppState;

/// `GET /api/menu` - the full, static menu structure.
pub async fn menu(State(state): State<AppState>) -> Result<Json<Catalog>> {
    let catalog = state.catalog().load().await?;
    Ok(Json(catalog))
}

/// `GET /api/available-items` - the availability record.
///
/// An absent record resolves to the empty default, never an error, so the
/// public page renders "nothing available" instead of failing before the
/// first admin save.
pub async fn available_items(State(state): State<AppState>) -> Result<Json<AvailabilityRecord>> {
    let record = state.store().read().await?;
    Ok(Json(record))
}

/// `GET /api/public-view` - available items grouped by category, sorted by
/// item name. Categories with nothing available are omitted; an empty array
/// is the global "nothing available" signal.
pub async fn public_view(State(state): State<AppState>) -> Result<Json<Vec<PublicCategory>>> {
    let catalog = state.catalog().load().await?;
    let record = state.store().read().await?;
    Ok(Json(view::public_view(&catalog, &record)))
}
