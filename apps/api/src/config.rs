use std::time::Duration;

use anyhow::{Context, Result};

use crate::preview::SessionSettings;
use crate::selection::{ThemeColor, DEFAULT_THEME_COLOR};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, the color scheme preference lives in process memory.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub debounce_ms: u64,
    pub default_theme_color: ThemeColor,
    pub max_photo_bytes: usize,
    /// Sessions untouched for this long are dropped.
    pub session_idle_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_theme_color = env_or("DEFAULT_THEME_COLOR", DEFAULT_THEME_COLOR);
        Ok(Config {
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            debounce_ms: env_or("DEBOUNCE_MS", "500")
                .parse::<u64>()
                .context("DEBOUNCE_MS must be a whole number of milliseconds")?,
            default_theme_color: ThemeColor::parse(&default_theme_color)
                .context("DEFAULT_THEME_COLOR must be a #rgb or #rrggbb color")?,
            max_photo_bytes: env_or("MAX_PHOTO_BYTES", "5242880")
                .parse::<usize>()
                .context("MAX_PHOTO_BYTES must be a byte count")?,
            session_idle_secs: env_or("SESSION_IDLE_SECS", "1800")
                .parse::<u64>()
                .context("SESSION_IDLE_SECS must be a whole number of seconds")?,
        })
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            default_theme_color: self.default_theme_color.clone(),
            max_photo_bytes: self.max_photo_bytes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redis_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            debounce_ms: 500,
            default_theme_color: ThemeColor::default(),
            max_photo_bytes: 5 * 1024 * 1024,
            session_idle_secs: 1800,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
