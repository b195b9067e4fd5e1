use futures_util::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tracing::{debug, info, warn};

use crate::events::Event;
use crate::protocol::decode_host_message;

/// Inbound side of the bridge: one JSON host message per text frame.
pub struct HostFeed {
    url: String,
    reconnect_delay: Duration,
}

impl HostFeed {
    pub fn new(url: impl Into<String>, reconnect_delay: Duration) -> Self {
        Self {
            url: url.into(),
            reconnect_delay,
        }
    }

    /// Spawns a task that connects and forwards host messages, in order.
    pub fn spawn(self, tx: mpsc::Sender<Event>) {
        tokio::spawn(async move {
            loop {
                info!(url = %self.url, "connecting to host bridge");

                match connect_async(self.url.as_str()).await {
                    Ok((ws_stream, _)) => {
                        info!("host bridge connected");

                        let (_, mut read) = ws_stream.split();

                        while let Some(msg) = read.next().await {
                            match msg {
                                Ok(tungstenite::Message::Text(text)) => {
                                    if !forward(&tx, &text).await {
                                        return;
                                    }
                                }
                                Ok(tungstenite::Message::Close(_)) => {
                                    info!("host bridge closed the connection");
                                    break;
                                }
                                Err(e) => {
                                    warn!("host bridge error: {}", e);
                                    break;
                                }
                                _ => {}
                            }
                        }
                    }
                    Err(e) => {
                        warn!("failed to connect to host bridge: {}", e);
                    }
                }

                info!(delay_ms = self.reconnect_delay.as_millis() as u64, "reconnecting to host bridge");
                tokio::time::sleep(self.reconnect_delay).await;
            }
        });
    }
}

/// Decode one frame and hand it to the main loop.
/// Returns false once the loop is gone.
async fn forward(tx: &mpsc::Sender<Event>, text: &str) -> bool {
    match decode_host_message(text) {
        Ok(message) => tx.send(Event::Host(message)).await.is_ok(),
        Err(e) => {
            warn!("dropping unreadable host message: {}", e);
            debug!("raw: {}", text.chars().take(200).collect::<String>());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HostMessage;

    #[tokio::test]
    async fn test_forward_keeps_order() {
        let (tx, mut rx) = mpsc::channel(8);

        assert!(forward(&tx, r#"{"type":"hideUI"}"#).await);
        assert!(forward(&tx, r#"{"type":"sellComplete"}"#).await);

        assert!(matches!(rx.recv().await, Some(Event::Host(HostMessage::Hide))));
        assert!(matches!(
            rx.recv().await,
            Some(Event::Host(HostMessage::SellComplete))
        ));
    }

    #[tokio::test]
    async fn test_forward_skips_garbage() {
        let (tx, mut rx) = mpsc::channel(8);

        assert!(forward(&tx, "not json").await);
        drop(tx);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_forward_stops_when_loop_gone() {
        let (tx, rx) = mpsc::channel(8);
        drop(rx);

        assert!(!forward(&tx, r#"{"type":"hideUI"}"#).await);
    }
}
