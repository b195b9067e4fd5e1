use tracing::{debug, info, warn};

use crate::actions::Action;
use crate::derivation::{can_sell, deadline_from_offset, derive_categories, items_to_sell};
use crate::error::BridgeError;
use crate::events::{Event, UserInput};
use crate::protocol::{offset_ms, HostMessage, MarketData, PriceUpdate, ShowPayload};
use crate::state::{selection, Category, PlayerInventory, ViewState};

/// Applies one event at a time to the view state and says what to do next.
///
/// Keeps the refresh counter: every inventory request gets a fresh sequence
/// number, and a completion older than the latest request is dropped.
#[derive(Debug, Default)]
pub struct Dispatcher {
    refresh_seq: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the latest inventory request.
    #[cfg(test)]
    pub fn refresh_seq(&self) -> u64 {
        self.refresh_seq
    }

    /// Apply one event. Renders are only requested while the overlay is
    /// visible; hidden state is still updated.
    pub fn handle(&mut self, state: &mut ViewState, event: Event, now_ms: i64) -> Vec<Action> {
        let mut actions = match event {
            Event::Host(message) => self.on_host(state, message, now_ms),
            Event::Input(input) => on_input(state, input),
            Event::InventoryLoaded { seq, result } => self.on_inventory(state, seq, result),
            Event::Tick => {
                if state.next_update_ms.is_some() {
                    vec![Action::RenderTimer]
                } else {
                    Vec::new()
                }
            }
            Event::Shutdown => Vec::new(),
        };

        if !state.visible {
            actions.retain(|action| !action.is_render());
        }
        actions
    }

    fn on_host(&mut self, state: &mut ViewState, message: HostMessage, now_ms: i64) -> Vec<Action> {
        match message {
            HostMessage::Show(show) => self.show(state, show, now_ms),
            HostMessage::Hide => {
                state.visible = false;
                selection::clear(state);
                info!("overlay hidden");
                vec![Action::Hide]
            }
            HostMessage::UpdatePrices(update) => update_prices(state, update, now_ms),
            HostMessage::SellComplete => {
                selection::clear(state);
                info!("sale complete, refreshing inventory");
                vec![Action::RenderTotals, self.next_refresh()]
            }
            HostMessage::Unknown => {
                debug!("ignoring unknown host message");
                Vec::new()
            }
        }
    }

    fn show(&mut self, state: &mut ViewState, show: ShowPayload, now_ms: i64) -> Vec<Action> {
        let ShowPayload {
            market_data,
            translations,
            supply_demand_enabled,
            inventory_link,
        } = show;
        let MarketData {
            config,
            prices,
            trends,
            next_update,
            supply_levels,
        } = market_data;

        state.inventory = config.items.clone();
        state.categories = derive_categories(&state.inventory);
        if let Category::Named(name) = &state.selected_category {
            if !state.categories.contains(name) {
                state.selected_category = Category::All;
            }
        }

        info!(
            market = %config.name,
            items = state.inventory.len(),
            categories = state.categories.len(),
            "market opened"
        );

        state.market = Some(config);
        state.translations = translations;
        state.prices = prices;
        state.trends = trends;
        state.supply_levels = supply_levels;
        state.supply_demand_enabled = supply_demand_enabled;
        state.inventory_link = inventory_link;
        state.next_update_ms = next_update.map(|offset| deadline_from_offset(now_ms, offset_ms(offset)));
        selection::clear(state);
        state.visible = true;

        vec![Action::Render, self.next_refresh()]
    }

    fn on_inventory(
        &mut self,
        state: &mut ViewState,
        seq: u64,
        result: Result<PlayerInventory, BridgeError>,
    ) -> Vec<Action> {
        if seq < self.refresh_seq {
            debug!(seq, latest = self.refresh_seq, "dropping superseded inventory refresh");
            return Vec::new();
        }

        state.player_inventory = match result {
            Ok(inventory) => {
                debug!(seq, items = inventory.len(), "inventory refreshed");
                inventory
            }
            Err(err) => {
                warn!(seq, "inventory refresh failed, showing empty inventory: {err}");
                PlayerInventory::new()
            }
        };

        let dropped = selection::reconcile(state);
        if !dropped.is_empty() {
            debug!(?dropped, "deselected items no longer owned");
        }

        vec![Action::Render]
    }

    fn next_refresh(&mut self) -> Action {
        self.refresh_seq += 1;
        Action::refresh(self.refresh_seq)
    }
}

fn update_prices(state: &mut ViewState, update: PriceUpdate, now_ms: i64) -> Vec<Action> {
    debug!(
        prices = update.prices.len(),
        trends = update.trends.len(),
        "prices updated"
    );

    // Wholesale replacement: anything missing falls back to base/stable.
    state.prices = update.prices;
    state.trends = update.trends;
    state.supply_demand_enabled = update.supply_demand_enabled;
    if let Some(levels) = update.supply_levels {
        state.supply_levels = levels;
    }
    // A zero offset leaves the countdown alone, same as a missing one.
    if let Some(offset) = update.next_update.filter(|offset| *offset != 0.0) {
        state.next_update_ms = Some(deadline_from_offset(now_ms, offset_ms(offset)));
    }

    vec![Action::Render]
}

fn on_input(state: &mut ViewState, input: UserInput) -> Vec<Action> {
    if !state.visible {
        debug!(?input, "overlay hidden, ignoring input");
        return Vec::new();
    }

    match input {
        UserInput::Toggle { id, checked } => {
            if selection::toggle(state, &id, checked) {
                vec![Action::RenderTotals]
            } else {
                debug!(%id, checked, "selection unchanged");
                Vec::new()
            }
        }
        UserInput::SelectCategory(name) => {
            state.selected_category = Category::parse(&name);
            vec![Action::Render]
        }
        UserInput::Sell => {
            if !can_sell(state) {
                debug!("nothing to sell");
                return Vec::new();
            }
            let items = items_to_sell(state);
            if items.is_empty() {
                debug!("selected items are filtered out, nothing to sell");
                return Vec::new();
            }
            info!(items = items.len(), "selling");
            vec![Action::sell(items)]
        }
        UserInput::Close => vec![Action::CloseUi],
    }
}
