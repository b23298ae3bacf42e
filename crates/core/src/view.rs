//! View composition: pure projections of (catalog, record) into display
//! structures.
//!
//! Neither function holds state or mutates its inputs; every call is a fresh
//! projection. The admin view shows every catalog item with its checkbox
//! state; the public view shows only the available subset, grouped by
//! category and sorted by item name.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{AvailabilityRecord, Catalog, ItemId, MenuItem};

/// One catalog item with its admin checkbox state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminItem {
    pub item: MenuItem,
    pub selected: bool,
}

/// One category of the admin view, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminCategory {
    pub name: String,
    pub items: Vec<AdminItem>,
}

/// One category of the public view: only available items, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Build the admin checkbox view.
///
/// Every catalog item appears exactly once, in catalog order, with
/// `selected` reflecting membership in the record. Record ids with no
/// catalog entry have nothing to attach to and are not represented.
#[must_use]
pub fn admin_view(catalog: &Catalog, record: &AvailabilityRecord) -> Vec<AdminCategory> {
    let available: HashSet<&ItemId> = record.available_items.iter().collect();

    catalog
        .categories
        .iter()
        .map(|category| AdminCategory {
            name: category.name.clone(),
            items: category
                .items
                .iter()
                .map(|item| AdminItem {
                    item: item.clone(),
                    selected: available.contains(&item.id),
                })
                .collect(),
        })
        .collect()
}

/// Build the public display view.
///
/// For each catalog category with at least one available item, the available
/// items sorted by name ascending (stable, so equal names keep catalog
/// order). Categories with nothing available are omitted entirely; record
/// ids with no catalog entry are skipped silently. An overall empty result
/// is the caller's "nothing available" signal.
#[must_use]
pub fn public_view(catalog: &Catalog, record: &AvailabilityRecord) -> Vec<PublicCategory> {
    let available: HashSet<&ItemId> = record.available_items.iter().collect();

    catalog
        .categories
        .iter()
        .filter_map(|category| {
            let mut items: Vec<MenuItem> = category
                .items
                .iter()
                .filter(|item| available.contains(&item.id))
                .cloned()
                .collect();

            if items.is_empty() {
                return None;
            }

            items.sort_by(|a, b| a.name.cmp(&b.name));

            Some(PublicCategory {
                name: category.name.clone(),
                items,
            })
        })
        .collect()
}
