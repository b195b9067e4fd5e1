use serde::Deserialize;
use std::fs;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub bridge: Bridge,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub general: General,
}

#[derive(Debug, Deserialize)]
pub struct Bridge {
    /// WebSocket the host pushes messages on
    pub host_url: String,
    /// Base URL for callbacks (e.g., "https://fourtwenty_dynmarket")
    pub callback_base: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_reconnect_ms")]
    pub reconnect_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Ui {
    /// Countdown refresh period
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct General {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_reconnect_ms() -> u64 {
    5_000
}

fn default_tick_ms() -> u64 {
    1_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Bridge {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_ms)
    }
}

impl Ui {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [bridge]
            host_url = "ws://127.0.0.1:30120/dynmarket"
            callback_base = "https://fourtwenty_dynmarket"
            "#,
        )
        .unwrap();

        assert_eq!(config.bridge.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.bridge.reconnect_delay(), Duration::from_secs(5));
        assert_eq!(config.ui.tick_period(), Duration::from_secs(1));
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            [bridge]
            host_url = "ws://host/bridge"
            callback_base = "http://host/cb"
            request_timeout_ms = 2500
            reconnect_ms = 1000

            [ui]
            tick_ms = 500

            [general]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.bridge.host_url, "ws://host/bridge");
        assert_eq!(config.bridge.request_timeout(), Duration::from_millis(2500));
        assert_eq!(config.ui.tick_period(), Duration::from_millis(500));
        assert_eq!(config.general.log_level, "debug");
    }

    #[test]
    fn test_missing_bridge_is_an_error() {
        assert!(Config::parse("[general]\nlog_level = \"warn\"\n").is_err());
    }
}
