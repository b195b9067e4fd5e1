use crate::error::BridgeError;
use crate::protocol::HostMessage;
use crate::state::PlayerInventory;

// Everything the main loop reacts to. Feeds and spawned requests only ever
// talk to the loop through this.
#[derive(Debug)]
pub enum Event {
    // Host pushed a message over the bridge
    Host(HostMessage),

    // Player clicked / typed something
    Input(UserInput),

    // A getPlayerInventory request finished (seq = request number)
    InventoryLoaded {
        seq: u64,
        result: Result<PlayerInventory, BridgeError>,
    },

    // Timer tick (every second)
    Tick,

    // Ctrl+C or stdin closed
    Shutdown,
}

/// Player interactions with the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Toggle { id: String, checked: bool },
    SelectCategory(String),
    Sell,
    // Close button or Escape
    Close,
}
