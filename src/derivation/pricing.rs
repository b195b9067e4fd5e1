use rust_decimal::Decimal;

use crate::state::{MarketItem, Trend, ViewState};

/// Coarse supply classification shown next to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyTier {
    High,
    Low,
    Normal,
}

impl SupplyTier {
    /// Translation key for the tier label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::High => "supply_high",
            Self::Low => "supply_low",
            Self::Normal => "supply_normal",
        }
    }
}

/// Current price: host overlay if present, else the item's base price.
pub fn effective_price(state: &ViewState, item: &MarketItem) -> Decimal {
    state
        .prices
        .get(&item.id)
        .copied()
        .unwrap_or(item.base_price)
}

pub fn trend_of(state: &ViewState, item: &MarketItem) -> Trend {
    state.trends.get(&item.id).copied().unwrap_or_default()
}

/// Supply pressure read off the price trend.
///
/// Falling price → oversupply (high), rising price → scarcity (low).
pub fn supply_tier(state: &ViewState, item: &MarketItem) -> SupplyTier {
    match trend_of(state, item) {
        Trend::Down => SupplyTier::High,
        Trend::Up => SupplyTier::Low,
        Trend::Stable => SupplyTier::Normal,
    }
}

pub fn owned_count(state: &ViewState, item: &MarketItem) -> u32 {
    state.player_inventory.count(&item.id)
}

/// Value of everything the player holds of one item.
/// Saturates at the representable bound instead of overflowing.
pub fn line_total(state: &ViewState, item: &MarketItem) -> Decimal {
    let price = effective_price(state, item);
    price
        .checked_mul(Decimal::from(owned_count(state, item)))
        .unwrap_or_else(|| saturated(price))
}

/// Sum of line totals over the selected items, saturating like `line_total`.
pub fn selected_total(state: &ViewState) -> Decimal {
    state
        .inventory
        .iter()
        .filter(|item| state.selected_items.contains(&item.id))
        .map(|item| line_total(state, item))
        .fold(Decimal::ZERO, |total, line| {
            total.checked_add(line).unwrap_or_else(|| saturated(line))
        })
}

fn saturated(toward: Decimal) -> Decimal {
    if toward.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Sell is only offered when there is something to get paid for.
pub fn can_sell(state: &ViewState) -> bool {
    state.market.is_some() && selected_total(state) > Decimal::ZERO
}
