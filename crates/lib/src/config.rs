//! Configuration types and loading.
//!
//! Config is loaded from a JSON file (e.g. `~/.yadobot/config.json`) and
//! environment. Credentials may live in the file or in env vars; env wins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Gateway server settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// LINE channel settings.
    #[serde(default)]
    pub line: LineConfig,

    /// Rakuten Travel search settings.
    #[serde(default)]
    pub travel: TravelConfig,
}

/// Gateway bind and port settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Port for the webhook HTTP server (default 15610).
    #[serde(default = "default_gateway_port")]
    pub port: u16,

    /// Bind address (default "127.0.0.1"). LINE requires HTTPS, so put a
    /// TLS-terminating proxy in front when exposing this.
    #[serde(default = "default_gateway_bind")]
    pub bind: String,
}

fn default_gateway_port() -> u16 {
    15610
}

fn default_gateway_bind() -> String {
    "127.0.0.1".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_gateway_port(),
            bind: default_gateway_bind(),
        }
    }
}

/// LINE Messaging API channel config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineConfig {
    /// Channel secret used to verify webhook signatures. Overridden by
    /// LINE_CHANNEL_SECRET env when set.
    pub channel_secret: Option<String>,

    /// Channel access token for the reply API. Overridden by
    /// LINE_CHANNEL_TOKEN env when set.
    pub channel_token: Option<String>,

    /// Override the LINE API base URL (tests, proxies).
    pub api_base: Option<String>,
}

/// Rakuten Travel keyword search config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelConfig {
    /// Rakuten application id. Overridden by RAKUTEN_APP_ID env when set.
    pub application_id: Option<String>,

    /// Upstream request timeout in seconds (default 5). One slow search
    /// must not stall the rest of a webhook batch indefinitely.
    #[serde(default = "default_travel_timeout_secs")]
    pub timeout_secs: u64,

    /// Override the Rakuten API base URL (tests, proxies).
    pub api_base: Option<String>,
}

fn default_travel_timeout_secs() -> u64 {
    5
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            application_id: None,
            timeout_secs: default_travel_timeout_secs(),
            api_base: None,
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_or_config(var: &str, fallback: Option<&String>) -> Option<String> {
    std::env::var(var)
        .ok()
        .and_then(|s| {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                Some(t.to_string())
            }
        })
        .or_else(|| non_empty(fallback))
}

/// Resolve the LINE channel secret: env LINE_CHANNEL_SECRET overrides config.
pub fn resolve_channel_secret(config: &Config) -> Option<String> {
    env_or_config("LINE_CHANNEL_SECRET", config.line.channel_secret.as_ref())
}

/// Resolve the LINE channel access token: env LINE_CHANNEL_TOKEN overrides config.
pub fn resolve_channel_token(config: &Config) -> Option<String> {
    env_or_config("LINE_CHANNEL_TOKEN", config.line.channel_token.as_ref())
}

/// Resolve the Rakuten application id: env RAKUTEN_APP_ID overrides config.
pub fn resolve_application_id(config: &Config) -> Option<String> {
    env_or_config("RAKUTEN_APP_ID", config.travel.application_id.as_ref())
}

/// Resolve config path from env or default.
pub fn default_config_path() -> PathBuf {
    std::env::var("YADOBOT_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".yadobot").join("config.json"))
                .unwrap_or_else(|| PathBuf::from("config.json"))
        })
}

/// Load config from the default path (or YADOBOT_CONFIG_PATH). Missing file => default config.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(default_config_path);
    if !path.exists() {
        log::debug!("config file not found, using defaults: {}", path.display());
        return Ok(Config::default());
    }
    let s = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parsing config from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gateway_port_and_bind() {
        let g = GatewayConfig::default();
        assert_eq!(g.port, 15610);
        assert_eq!(g.bind, "127.0.0.1");
    }

    #[test]
    fn default_travel_timeout() {
        let t = TravelConfig::default();
        assert_eq!(t.timeout_secs, 5);
        assert!(t.application_id.is_none());
    }

    #[test]
    fn parse_config_json_camel_case() {
        let config: Config = serde_json::from_str(
            r#"{
                "gateway": {"port": 8080, "bind": "0.0.0.0"},
                "line": {"channelSecret": "s", "channelToken": "t"},
                "travel": {"applicationId": "a", "timeoutSecs": 2}
            }"#,
        )
        .expect("parse config");
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.gateway.bind, "0.0.0.0");
        assert_eq!(config.line.channel_secret.as_deref(), Some("s"));
        assert_eq!(config.line.channel_token.as_deref(), Some("t"));
        assert_eq!(config.travel.application_id.as_deref(), Some("a"));
        assert_eq!(config.travel.timeout_secs, 2);
    }

    #[test]
    fn non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some(&"  secret  ".to_string())).as_deref(), Some("secret"));
        assert_eq!(non_empty(Some(&"   ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }
}
