//! Newtype for menu item identifiers.
//!
//! Item ids are externally assigned, stable strings (the catalog document
//! owns them). The newtype keeps them from being mixed up with other string
//! data such as category names.

use serde::{Deserialize, Serialize};

/// A menu item identifier.
///
/// Ids are opaque to this system: they are never parsed, only compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from its string form.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_serde_is_transparent() {
        let id = ItemId::from("espresso-01");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"espresso-01\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_item_id_display_matches_inner() {
        let id = ItemId::from("latte-02");
        assert_eq!(id.to_string(), "latte-02");
        assert_eq!(id.as_str(), "latte-02");
    }
}
