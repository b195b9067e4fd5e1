mod actions;
mod api;
mod config;
mod derivation;
mod dispatch;
mod error;
mod events;
mod executor;
mod feeds;
mod format;
mod protocol;
mod render;
mod state;

use anyhow::Context;
use api::bridge::BridgeClient;
use chrono::Utc;
use config::Config;
use dispatch::Dispatcher;
use events::Event;
use executor::Executor;
use feeds::{clock, input, HostFeed};
use render::TextRenderer;
use state::ViewState;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let path =
        std::env::var("DYNMARKET_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load(&path).with_context(|| format!("failed to load config from {path}"))?;
    init_logging(&cfg.general.log_level);
    info!(config = %path, "config loaded");

    let bridge = BridgeClient::new(
        cfg.bridge.callback_base.as_str(),
        cfg.bridge.request_timeout(),
    )?;

    // Create the event channel
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Start feeds
    HostFeed::new(cfg.bridge.host_url.as_str(), cfg.bridge.reconnect_delay()).spawn(tx.clone());
    input::spawn(tx.clone());
    clock::spawn(tx.clone(), cfg.ui.tick_period());

    let ctrl_c_tx = tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = ctrl_c_tx.send(Event::Shutdown).await;
        }
    });

    let mut state = ViewState::new();
    let mut dispatcher = Dispatcher::new();
    let mut executor = Executor::new(bridge, tx, TextRenderer::new(std::io::stdout()));

    // Main event loop: one event at a time, in arrival order
    info!("overlay ready");
    while let Some(event) = rx.recv().await {
        if matches!(event, Event::Shutdown) {
            info!("shutting down");
            break;
        }

        let now_ms = Utc::now().timestamp_millis();
        for action in dispatcher.handle(&mut state, event, now_ms) {
            executor.execute(action, &state, now_ms);
        }
    }

    Ok(())
}

/// RUST_LOG wins over the configured level. Logs go to stderr so they
/// don't interleave with the rendered overlay on stdout.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
