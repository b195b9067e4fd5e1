use crate::state::MarketItem;

/// Side effects the dispatcher requests.
/// The main loop turns these into renders and bridge calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Redraw everything: categories, list, totals, timer.
    Render,

    /// Redraw only the totals bar and sell button.
    RenderTotals,

    /// Redraw only the countdown.
    RenderTimer,

    /// Hide the overlay surface.
    Hide,

    /// Fetch the player's inventory in the background.
    /// The result comes back as `Event::InventoryLoaded` with this seq.
    RefreshInventory { seq: u64 },

    /// Tell the host to close us (fire-and-forget).
    CloseUi,

    /// Tell the host to buy these items (fire-and-forget).
    SellItems { items: Vec<MarketItem> },
}

impl Action {
    pub fn refresh(seq: u64) -> Self {
        Self::RefreshInventory { seq }
    }

    pub fn sell(items: Vec<MarketItem>) -> Self {
        Self::SellItems { items }
    }

    /// Check if this action draws something.
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render | Self::RenderTotals | Self::RenderTimer)
    }
}
