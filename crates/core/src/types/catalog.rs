//! The read-only menu catalog.
//!
//! The catalog is an externally authored JSON document (`menu.json`) of
//! categories, each holding an ordered list of items. This system never
//! mutates it; the document is re-read on every query so catalog edits are
//! visible immediately.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// A single item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Externally assigned, stable identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Price in the shop's currency, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A named group of menu items.
///
/// Category names are unique within a catalog; item order is the catalog
/// author's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The full menu document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Iterate over every item in the catalog, in category-then-item order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_round_trips_original_document_shape() {
        let json = r#"{
            "categories": [
                {
                    "name": "Drinks",
                    "items": [
                        { "id": "tea-01", "name": "Tea", "price": 2.5 },
                        { "id": "coffee-01", "name": "Coffee", "price": 3.0 }
                    ]
                }
            ]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.categories[0].name, "Drinks");
        assert_eq!(catalog.categories[0].items[0].id, ItemId::from("tea-01"));

        let out = serde_json::to_value(&catalog).unwrap();
        assert_eq!(out["categories"][0]["items"][1]["name"], "Coffee");
    }

    #[test]
    fn test_items_iterates_across_categories_in_order() {
        let catalog = Catalog {
            categories: vec![
                Category {
                    name: "A".into(),
                    items: vec![MenuItem {
                        id: "1".into(),
                        name: "x".into(),
                        price: Decimal::ONE,
                    }],
                },
                Category {
                    name: "B".into(),
                    items: vec![MenuItem {
                        id: "2".into(),
                        name: "y".into(),
                        price: Decimal::TWO,
                    }],
                },
            ],
        };

        let ids: Vec<&str> = catalog.items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }
}
