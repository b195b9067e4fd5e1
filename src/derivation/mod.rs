mod countdown;
mod filter;
mod pricing;

pub use countdown::{deadline_from_offset, remaining_ms};
pub use filter::{derive_categories, items_to_sell, visible_items};
pub use pricing::{
    can_sell, effective_price, line_total, owned_count, selected_total, supply_tier, trend_of,
    SupplyTier,
};

use crate::format::{image_url, DEFAULT_IMAGE};
use crate::state::{selection, Category, Trend, ViewState};
use rust_decimal::Decimal;

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub category: Category,
    pub label: String,
    pub active: bool,
}

/// One line of the item list, fully derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub price: Decimal,
    pub trend: Trend,
    /// Present only while supply/demand is enabled
    pub supply: Option<SupplyTier>,
    pub supply_label: Option<String>,
    pub supply_level: Option<Decimal>,
    pub line_total: Decimal,
    pub selected: bool,
    pub selectable: bool,
    pub image_url: String,
}

/// Totals bar: selected value and whether sell is offered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub selected_total: Decimal,
    pub can_sell: bool,
}

impl Totals {
    pub fn capture(state: &ViewState) -> Self {
        Self {
            selected_total: selected_total(state),
            can_sell: can_sell(state),
        }
    }
}

/// Localized strings the renderer needs, resolved once per capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub quantity: String,
    pub total: String,
    pub total_value: String,
    pub sell: String,
    pub next_update: String,
    /// Shown under the title while supply/demand is enabled
    pub market_info: Option<String>,
}

impl Labels {
    pub fn capture(state: &ViewState) -> Self {
        let label = |key: &str| state.label(key).to_string();
        Self {
            quantity: label("quantity"),
            total: label("total"),
            total_value: label("total_value"),
            sell: label("sell_all"),
            next_update: label("next_update"),
            market_info: state
                .supply_demand_enabled
                .then(|| label("supply_demand_active")),
        }
    }
}

/// Read-only snapshot handed to the renderer.
/// Recomputed from scratch on every render, nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: String,
    pub categories: Vec<CategoryButton>,
    pub rows: Vec<ItemRow>,
    pub totals: Totals,
    pub remaining_ms: Option<i64>,
    pub labels: Labels,
}

impl View {
    pub fn capture(state: &ViewState, now_ms: i64) -> Self {
        let title = state
            .market
            .as_ref()
            .map(|market| market.name.clone())
            .unwrap_or_default();

        let mut categories = vec![CategoryButton {
            category: Category::All,
            label: "All".to_string(),
            active: state.selected_category == Category::All,
        }];
        categories.extend(state.categories.iter().map(|name| {
            let category = Category::Named(name.clone());
            CategoryButton {
                active: state.selected_category == category,
                category,
                label: name.clone(),
            }
        }));

        let rows = visible_items(state)
            .map(|item| ItemRow {
                id: item.id.clone(),
                name: item.name.clone(),
                count: owned_count(state, item),
                price: effective_price(state, item),
                trend: trend_of(state, item),
                supply: state
                    .supply_demand_enabled
                    .then(|| supply_tier(state, item)),
                supply_label: state
                    .supply_demand_enabled
                    .then(|| state.label(supply_tier(state, item).label_key()).to_string()),
                supply_level: state
                    .supply_demand_enabled
                    .then(|| state.supply_levels.get(&item.id).copied())
                    .flatten(),
                line_total: line_total(state, item),
                selected: state.selected_items.contains(&item.id),
                selectable: selection::is_selectable(state, &item.id),
                image_url: state
                    .inventory_link
                    .as_deref()
                    .map(|template| image_url(template, &item.id))
                    .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            })
            .collect();

        Self {
            title,
            categories,
            rows,
            totals: Totals::capture(state),
            remaining_ms: remaining_ms(state, now_ms),
            labels: Labels::capture(state),
        }
    }
}
