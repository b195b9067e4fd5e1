use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::events::Event;

/// Spawns a task that sends a Tick every `period` until the loop is gone.
pub fn spawn(tx: mpsc::Sender<Event>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        spawn(tx, Duration::from_millis(10));

        assert!(matches!(rx.recv().await, Some(Event::Tick)));
        assert!(matches!(rx.recv().await, Some(Event::Tick)));
    }
}
