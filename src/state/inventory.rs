use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use crate::protocol::lenient_map;

/// Owned-count record for one item, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct OwnedItem {
    #[serde(default)]
    pub count: u32,
}

/// Snapshot of what the player carries: item id → owned count.
/// Replaced wholesale after every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerInventory {
    items: HashMap<String, OwnedItem>,
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned count for an item. Missing items count as 0.
    pub fn count(&self, id: &str) -> u32 {
        self.items.get(id).map(|owned| owned.count).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn set(&mut self, id: impl Into<String>, count: u32) {
        self.items.insert(id.into(), OwnedItem { count });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, u32)> for PlayerInventory {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(id, count)| (id, OwnedItem { count }))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for PlayerInventory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_map(deserializer).map(|items| Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_item_counts_zero() {
        let inventory: PlayerInventory =
            serde_json::from_str(r#"{"weed":{"count":3}}"#).unwrap();

        assert_eq!(inventory.count("weed"), 3);
        assert_eq!(inventory.count("coke"), 0);
    }

    #[test]
    fn test_empty_array_is_empty_inventory() {
        // Empty Lua tables encode as arrays
        let inventory: PlayerInventory = serde_json::from_str("[]").unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let inventory: PlayerInventory =
            serde_json::from_str(r#"{"weed":{"count":2,"label":"Weed","weight":10}}"#).unwrap();
        assert_eq!(inventory.count("weed"), 2);
    }
}
