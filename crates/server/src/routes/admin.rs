//! Admin route handlers: the checkbox pre-selection view and the
//! availability mutation. Both require an admin session.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use menuboard_core::{AdminCategory, ItemId, view};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// `GET /api/admin-view` - every catalog item with its selection state, in
/// catalog order.
pub async fn admin_view(
    _: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminCategory>>> {
    let catalog = state.catalog().load().await?;
    let record = state.store().read().await?;
    Ok(Json(view::admin_view(&catalog, &record)))
}

/// Request body for `POST /api/update-availability`.
///
/// A missing `availableItems` field means "nothing available", matching the
/// original wire contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    #[serde(default)]
    pub available_items: Vec<ItemId>,
}

/// Response body for `POST /api/update-availability`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityResponse {
    pub last_updated: DateTime<Utc>,
}

/// `POST /api/update-availability` - replace the entire availability set.
///
/// All-or-nothing: on failure the prior record remains effective. The ids
/// are not validated against the catalog; unknown ids are persisted and
/// simply never shown.
pub async fn update_availability(
    _: RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> Result<Json<UpdateAvailabilityResponse>> {
    let last_updated = state.store().replace(request.available_items).await?;
    tracing::info!(%last_updated, "Availability updated");
    Ok(Json(UpdateAvailabilityResponse { last_updated }))
}
