use tokio::sync::mpsc;
use tracing::warn;

use crate::actions::Action;
use crate::api::bridge::BridgeClient;
use crate::derivation::View;
use crate::events::Event;
use crate::render::Renderer;
use crate::state::ViewState;

/// Turns dispatcher actions into draws and bridge calls.
///
/// Bridge calls are spawned and never awaited here. Refresh results come
/// back through the event channel.
pub struct Executor<R: Renderer> {
    bridge: BridgeClient,
    tx: mpsc::Sender<Event>,
    renderer: R,
}

impl<R: Renderer> Executor<R> {
    pub fn new(bridge: BridgeClient, tx: mpsc::Sender<Event>, renderer: R) -> Self {
        Self {
            bridge,
            tx,
            renderer,
        }
    }

    pub fn execute(&mut self, action: Action, state: &ViewState, now_ms: i64) {
        let drawn = match action {
            Action::Render => self.renderer.render(&View::capture(state, now_ms)),
            Action::RenderTotals => self.renderer.render_totals(&View::capture(state, now_ms)),
            Action::RenderTimer => self.renderer.render_timer(&View::capture(state, now_ms)),
            Action::Hide => self.renderer.hide(),
            Action::RefreshInventory { seq } => {
                self.spawn_refresh(seq);
                Ok(())
            }
            Action::CloseUi => {
                let bridge = self.bridge.clone();
                tokio::spawn(async move {
                    if let Err(e) = bridge.close_ui().await {
                        warn!("closeUI failed: {}", e);
                    }
                });
                Ok(())
            }
            Action::SellItems { items } => {
                let bridge = self.bridge.clone();
                tokio::spawn(async move {
                    if let Err(e) = bridge.sell_items(&items).await {
                        warn!("sellItems failed: {}", e);
                    }
                });
                Ok(())
            }
        };

        if let Err(e) = drawn {
            warn!("render failed: {}", e);
        }
    }

    fn spawn_refresh(&self, seq: u64) {
        let bridge = self.bridge.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = bridge.get_player_inventory().await;
            // Loop gone means we're shutting down
            let _ = tx.send(Event::InventoryLoaded { seq, result }).await;
        });
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextRenderer;
    use std::time::Duration;

    fn executor() -> (Executor<TextRenderer<Vec<u8>>>, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(8);
        let bridge =
            BridgeClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        (Executor::new(bridge, tx, TextRenderer::new(Vec::new())), rx)
    }

    fn output(executor: &Executor<TextRenderer<Vec<u8>>>) -> String {
        String::from_utf8(executor.renderer().get_ref().clone()).unwrap()
    }

    #[tokio::test]
    async fn test_render_and_hide() {
        let (mut executor, _rx) = executor();
        let state = ViewState::new();

        executor.execute(Action::Render, &state, 0);
        executor.execute(Action::Hide, &state, 0);

        let text = output(&executor);
        assert!(text.contains("[All]"));
        assert!(text.ends_with("-- closed --\n"));
    }

    #[tokio::test]
    async fn test_failed_refresh_comes_back_as_event() {
        let (mut executor, mut rx) = executor();

        executor.execute(Action::refresh(7), &ViewState::new(), 0);

        match rx.recv().await {
            Some(Event::InventoryLoaded { seq, result }) => {
                assert_eq!(seq, 7);
                assert!(result.is_err());
            }
            other => panic!("expected InventoryLoaded, got {other:?}"),
        }
    }
}
