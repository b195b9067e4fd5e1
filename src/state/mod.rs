mod inventory;
mod market;
pub mod selection;
mod view;

pub use inventory::PlayerInventory;
pub use market::{MarketConfig, MarketItem, Trend};
pub use view::{Category, ViewState};
