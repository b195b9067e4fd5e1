use super::view::ViewState;

/// Mark or unmark an item for selling. Returns true if the set changed.
///
/// An item can only be marked while it is in the open market and the player
/// owns at least one.
pub fn toggle(state: &mut ViewState, id: &str, checked: bool) -> bool {
    if !checked {
        return state.selected_items.remove(id);
    }

    if !is_selectable(state, id) {
        return false;
    }
    state.selected_items.insert(id.to_string())
}

/// Whether the checkbox for an item can be ticked.
pub fn is_selectable(state: &ViewState, id: &str) -> bool {
    state.item(id).is_some() && state.player_inventory.count(id) > 0
}

pub fn clear(state: &mut ViewState) {
    state.selected_items.clear();
}

/// Drop selected ids that are no longer sellable (count 0 or gone from the
/// market). Run after every inventory refresh. Returns the dropped ids.
pub fn reconcile(state: &mut ViewState) -> Vec<String> {
    let view: &ViewState = state;
    let stale: Vec<String> = view
        .selected_items
        .iter()
        .filter(|id| !is_selectable(view, id.as_str()))
        .cloned()
        .collect();

    for id in &stale {
        state.selected_items.remove(id);
    }
    stale
}
