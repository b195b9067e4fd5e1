use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{BridgeError, BridgeResult};
use crate::protocol::SellItemsRequest;
use crate::state::{MarketItem, PlayerInventory};

const GET_PLAYER_INVENTORY: &str = "getPlayerInventory";
const CLOSE_UI: &str = "closeUI";
const SELL_ITEMS: &str = "sellItems";

/// Client for the host's callback endpoint.
/// Every request is a JSON POST to `{base}/{endpoint}`.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    http: reqwest::Client,
    base: String,
}

impl BridgeClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> BridgeResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base, endpoint)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> BridgeResult<reqwest::Response> {
        debug!(endpoint, "bridge request");
        let response = self.http.post(self.url(endpoint)).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Status { endpoint, status });
        }
        Ok(response)
    }

    /// Fetch owned counts for every item the player carries.
    pub async fn get_player_inventory(&self) -> BridgeResult<PlayerInventory> {
        let response = self
            .post(GET_PLAYER_INVENTORY, &serde_json::json!({}))
            .await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|source| BridgeError::Decode {
            endpoint: GET_PLAYER_INVENTORY,
            source,
        })
    }

    /// Ask the host to close the overlay. It answers with a hide message.
    pub async fn close_ui(&self) -> BridgeResult<()> {
        self.post(CLOSE_UI, &serde_json::json!({})).await?;
        Ok(())
    }

    /// Ask the host to buy these items. It answers with sellComplete.
    pub async fn sell_items(&self, items: &[MarketItem]) -> BridgeResult<()> {
        self.post(SELL_ITEMS, &SellItemsRequest { items }).await?;
        Ok(())
    }
}
