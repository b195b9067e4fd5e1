use crate::state::{MarketItem, ViewState};

/// Items matching the active category, in market order.
pub fn visible_items(state: &ViewState) -> impl Iterator<Item = &MarketItem> {
    state
        .inventory
        .iter()
        .filter(move |item| state.selected_category.matches(&item.category))
}

/// What the sell button sends: visible items that are selected.
pub fn items_to_sell(state: &ViewState) -> Vec<MarketItem> {
    visible_items(state)
        .filter(|item| state.selected_items.contains(&item.id))
        .cloned()
        .collect()
}

/// Distinct categories, in order of first appearance.
pub fn derive_categories(items: &[MarketItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.iter().any(|c| c == &item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}
