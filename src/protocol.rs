use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::state::{MarketConfig, MarketItem, Trend};

/// Messages the host pushes over the bridge, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    #[serde(rename = "showUI", alias = "show")]
    Show(ShowPayload),

    #[serde(rename = "hideUI", alias = "hide")]
    Hide,

    #[serde(rename = "updatePrices")]
    UpdatePrices(PriceUpdate),

    #[serde(rename = "sellComplete")]
    SellComplete,

    /// Anything newer than this client understands.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowPayload {
    #[serde(rename = "marketData")]
    pub market_data: MarketData,
    #[serde(default, deserialize_with = "lenient_map")]
    pub translations: HashMap<String, String>,
    #[serde(rename = "supplyDemandEnabled", default)]
    pub supply_demand_enabled: bool,
    #[serde(rename = "inventoryLink", default)]
    pub inventory_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub config: MarketConfig,
    #[serde(default, deserialize_with = "lenient_map")]
    pub prices: HashMap<String, Decimal>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub trends: HashMap<String, Trend>,
    /// Milliseconds until the next price refresh
    #[serde(rename = "nextUpdate", default)]
    pub next_update: Option<f64>,
    #[serde(rename = "supplyLevels", default, deserialize_with = "lenient_map")]
    pub supply_levels: HashMap<String, Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceUpdate {
    #[serde(default, deserialize_with = "lenient_map")]
    pub prices: HashMap<String, Decimal>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub trends: HashMap<String, Trend>,
    #[serde(rename = "supplyDemandEnabled", default)]
    pub supply_demand_enabled: bool,
    #[serde(rename = "nextUpdate", default)]
    pub next_update: Option<f64>,
    #[serde(rename = "supplyLevels", default, deserialize_with = "lenient_map_opt")]
    pub supply_levels: Option<HashMap<String, Decimal>>,
}

/// Body of the `sellItems` request.
#[derive(Debug, Clone, Serialize)]
pub struct SellItemsRequest<'a> {
    pub items: &'a [MarketItem],
}

/// Decode one bridge frame.
pub fn decode_host_message(text: &str) -> serde_json::Result<HostMessage> {
    serde_json::from_str(text)
}

/// Offsets arrive as JSON numbers that may carry a fraction.
pub fn offset_ms(offset: f64) -> i64 {
    offset.round() as i64
}

/// Map that tolerates `[]` and `null`. Empty Lua tables encode as arrays.
pub fn lenient_map<'de, D, V>(deserializer: D) -> Result<HashMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapOrList<V> {
        Map(HashMap<String, V>),
        List(Vec<IgnoredAny>),
        Null,
    }

    Ok(match MapOrList::<V>::deserialize(deserializer)? {
        MapOrList::Map(map) => map,
        MapOrList::List(_) | MapOrList::Null => HashMap::new(),
    })
}

fn lenient_map_opt<'de, D, V>(deserializer: D) -> Result<Option<HashMap<String, V>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    lenient_map(deserializer).map(Some)
}
