use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default except where noted; `REDIS_URL` is optional and
/// selects the in-memory store when absent.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    pub store_key_prefix: String,
    pub port: u16,
    pub rust_log: String,
    /// Seconds the "round complete" prompt waits before auto-advancing.
    pub advance_countdown_secs: u32,
    /// Delay before the final round redirects to the report view.
    pub report_redirect_delay_ms: u64,
    pub focus_loss_threshold: u32,
    pub max_upload_bytes: usize,
    pub parse_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            store_key_prefix: "rehearsal:".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            advance_countdown_secs: 30,
            report_redirect_delay_ms: 3000,
            focus_loss_threshold: 3,
            max_upload_bytes: 10 * 1024 * 1024,
            parse_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            redis_url: optional_env("REDIS_URL"),
            store_key_prefix: optional_env("STORE_KEY_PREFIX")
                .unwrap_or(defaults.store_key_prefix),
            port: parse_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            advance_countdown_secs: parse_env(
                "ADVANCE_COUNTDOWN_SECS",
                defaults.advance_countdown_secs,
            )?,
            report_redirect_delay_ms: parse_env(
                "REPORT_REDIRECT_DELAY_MS",
                defaults.report_redirect_delay_ms,
            )?,
            focus_loss_threshold: parse_env("FOCUS_LOSS_THRESHOLD", defaults.focus_loss_threshold)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            parse_timeout_secs: parse_env("PARSE_TIMEOUT_SECS", defaults.parse_timeout_secs)?,
        };

        if config.advance_countdown_secs == 0 {
            anyhow::bail!("ADVANCE_COUNTDOWN_SECS must be at least 1");
        }
        if config.focus_loss_threshold == 0 {
            anyhow::bail!("FOCUS_LOSS_THRESHOLD must be at least 1");
        }

        Ok(config)
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
