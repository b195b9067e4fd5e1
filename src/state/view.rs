use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

use super::inventory::PlayerInventory;
use super::market::{MarketConfig, MarketItem, Trend};

/// Active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parse a filter name. Exactly "all" is the catch-all.
    pub fn parse(name: &str) -> Self {
        if name == "all" {
            Category::All
        } else {
            Category::Named(name.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == category,
        }
    }
}

/// Everything the overlay knows. One instance lives for the lifetime of
/// the overlay and is passed explicitly to the dispatcher, selection and
/// derivation code.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Open market. Set on show, kept across hide.
    pub market: Option<MarketConfig>,
    /// Label key → localized string
    pub translations: HashMap<String, String>,
    /// Sparse price overlay over base prices
    pub prices: HashMap<String, Decimal>,
    /// Sparse trend overlay, absent = stable
    pub trends: HashMap<String, Trend>,
    /// Supply metric per item, only shown when supply/demand is enabled
    pub supply_levels: HashMap<String, Decimal>,
    /// Items of the open market, in host order
    pub inventory: Vec<MarketItem>,
    /// Distinct categories of `inventory`, first-appearance order
    pub categories: Vec<String>,
    pub player_inventory: PlayerInventory,
    pub selected_category: Category,
    /// Items marked for selling. Only ids with owned count > 0.
    pub selected_items: BTreeSet<String>,
    /// Next price refresh, unix milliseconds
    pub next_update_ms: Option<i64>,
    pub supply_demand_enabled: bool,
    /// Image URL template, "%s" is replaced by the item id
    pub inventory_link: Option<String>,
    pub visible: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an inventory item by id.
    pub fn item(&self, id: &str) -> Option<&MarketItem> {
        self.inventory.iter().find(|item| item.id == id)
    }

    /// Localized label, falling back to the key itself.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_state_is_empty() {
        let state = ViewState::new();

        assert!(state.market.is_none());
        assert!(state.inventory.is_empty());
        assert!(state.selected_items.is_empty());
        assert_eq!(state.selected_category, Category::All);
        assert_eq!(state.next_update_ms, None);
        assert!(!state.visible);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("all"), Category::All);
        // A host category may be called "All"
        assert_eq!(Category::parse("All"), Category::Named("All".to_string()));
        assert_eq!(Category::parse("drugs"), Category::Named("drugs".to_string()));

        assert!(Category::All.matches("anything"));
        assert!(Category::parse("drugs").matches("drugs"));
        assert!(!Category::parse("drugs").matches("guns"));
    }

    #[test]
    fn test_label_fallback() {
        let mut state = ViewState::new();
        state
            .translations
            .insert("total".to_string(), "Gesamt".to_string());

        assert_eq!(state.label("total"), "Gesamt");
        assert_eq!(state.label("quantity"), "quantity");
    }

    #[test]
    fn test_item_lookup() {
        let mut state = ViewState::new();
        state
            .inventory
            .push(MarketItem::new("weed", "Weed", "drugs", dec!(100)));

        assert!(state.item("weed").is_some());
        assert!(state.item("coke").is_none());
    }
}
