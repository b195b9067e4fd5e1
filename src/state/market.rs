use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One item the open market buys, as configured on the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    /// Item identifier (e.g., "weed")
    #[serde(rename = "item")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Category used by the filter buttons
    #[serde(default)]
    pub category: String,
    /// Price used when the host sends no overlay price
    #[serde(rename = "basePrice", default)]
    pub base_price: Decimal,
}

#[cfg(test)]
impl MarketItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            base_price,
        }
    }
}

/// Market identity - replaced on every show.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MarketConfig {
    /// Market title (e.g., "Grove Street Dealer")
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<MarketItem>,
}

/// Direction of an item's price relative to its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl From<String> for Trend {
    // Anything the host sends that we don't know reads as stable.
    fn from(value: String) -> Self {
        match value.as_str() {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Stable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_wire_names() {
        let item: MarketItem = serde_json::from_str(
            r#"{"item":"weed","name":"Weed","category":"drugs","basePrice":100}"#,
        )
        .unwrap();

        assert_eq!(item.id, "weed");
        assert_eq!(item.category, "drugs");
        assert_eq!(item.base_price, dec!(100));
    }

    #[test]
    fn test_unknown_trend_is_stable() {
        let trend: Trend = serde_json::from_str(r#""sideways""#).unwrap();
        assert_eq!(trend, Trend::Stable);

        let trend: Trend = serde_json::from_str(r#""down""#).unwrap();
        assert_eq!(trend, Trend::Down);
    }
}
