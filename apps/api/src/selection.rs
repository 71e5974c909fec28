//! Selection state: the active template variant, theme color, and color scheme.
//!
//! One `Selection` per preview session, passed explicitly to the controller and
//! the renderer. Invalid variants and colors are rejected here, at mutation
//! time, so the renderer only ever sees valid values.
//!
//! The color scheme is the single piece of cross-session persistence: it is
//! read from a `SchemeStore` when a session starts and written on every toggle.

use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

/// Key under which the scheme preference is stored.
pub const SCHEME_KEY: &str = "theme";

/// Upper bound on any single Redis round trip, connecting included.
const STORE_TIMEOUT: Duration = Duration::from_secs(2);

pub const DEFAULT_THEME_COLOR: &str = "#3b82f6";

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("unknown template variant '{0}'")]
    UnknownVariant(String),

    #[error("invalid theme color '{0}': expected #rgb or #rrggbb")]
    InvalidThemeColor(String),

    #[error("unknown color scheme '{0}'")]
    UnknownScheme(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Variant
// ────────────────────────────────────────────────────────────────────────────

/// The five interchangeable resume layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Two-column layout with a colored sidebar.
    #[default]
    Modern,
    /// Centered serif layout with ruled section headings.
    Classic,
    /// Monochrome, whitespace-driven single column.
    Minimal,
    /// Gradient banner header with accent bars.
    Creative,
    /// Conservative serif layout with uppercase headings.
    Professional,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Modern,
        Variant::Classic,
        Variant::Minimal,
        Variant::Creative,
        Variant::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Modern => "modern",
            Variant::Classic => "classic",
            Variant::Minimal => "minimal",
            Variant::Creative => "creative",
            Variant::Professional => "professional",
        }
    }
}

impl FromStr for Variant {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme color
// ────────────────────────────────────────────────────────────────────────────

/// A validated CSS hex color, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let s = raw.trim();
        let valid = s
            .strip_prefix('#')
            .map(|hex| (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .unwrap_or(false);

        if valid {
            Ok(ThemeColor(s.to_ascii_lowercase()))
        } else {
            Err(SelectionError::InvalidThemeColor(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        ThemeColor(DEFAULT_THEME_COLOR.to_string())
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Color scheme
// ────────────────────────────────────────────────────────────────────────────

/// Light/dark preference for the editing surface. Never affects the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(SelectionError::UnknownScheme(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Selection {
    pub variant: Variant,
    pub theme_color: ThemeColor,
    pub color_scheme: ColorScheme,
}

impl Selection {
    pub fn new(theme_color: ThemeColor, color_scheme: ColorScheme) -> Self {
        Selection {
            variant: Variant::default(),
            theme_color,
            color_scheme,
        }
    }

    /// Switches the active variant. Leaves the selection untouched on error.
    pub fn select_variant(&mut self, name: &str) -> Result<Variant, SelectionError> {
        let variant = name.parse::<Variant>()?;
        self.variant = variant;
        Ok(variant)
    }

    /// Replaces the theme color. Leaves the selection untouched on error.
    pub fn set_theme_color(&mut self, raw: &str) -> Result<&ThemeColor, SelectionError> {
        self.theme_color = ThemeColor::parse(raw)?;
        Ok(&self.theme_color)
    }

    pub fn toggle_scheme(&mut self) -> ColorScheme {
        self.color_scheme = self.color_scheme.toggled();
        self.color_scheme
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scheme persistence
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("redis did not answer within {0:?}")]
    Timeout(Duration),
}

/// Key-value persistence for the color scheme preference.
///
/// Carried in `AppState` as `Arc<dyn SchemeStore>`.
#[async_trait]
pub trait SchemeStore: Send + Sync {
    /// Returns the stored scheme, or `None` when nothing (valid) is stored.
    async fn load(&self) -> Result<Option<ColorScheme>, StoreError>;

    async fn save(&self, scheme: ColorScheme) -> Result<(), StoreError>;
}

/// Redis-backed store. One string key, `light` or `dark`.
///
/// The multiplexed connection is opened lazily, reused across calls and
/// dropped after any failure so the next call reconnects.
pub struct RedisSchemeStore {
    client: redis::Client,
    conn: Mutex<Option<MultiplexedConnection>>,
    timeout: Duration,
}

impl RedisSchemeStore {
    pub fn new(client: redis::Client) -> Self {
        RedisSchemeStore {
            client,
            conn: Mutex::new(None),
            timeout: STORE_TIMEOUT,
        }
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        let mut cached = self.conn.lock().await;
        if let Some(conn) = cached.as_ref() {
            return Ok(conn.clone());
        }
        let conn = self
            .bounded(self.client.get_multiplexed_async_connection())
            .await?;
        *cached = Some(conn.clone());
        Ok(conn)
    }

    async fn bounded<T>(&self, op: impl Future<Output = RedisResult<T>>) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout(self.timeout)),
        }
    }

    async fn forget_connection<T>(&self, result: Result<T, StoreError>) -> Result<T, StoreError> {
        if result.is_err() {
            self.conn.lock().await.take();
        }
        result
    }
}

#[async_trait]
impl SchemeStore for RedisSchemeStore {
    async fn load(&self) -> Result<Option<ColorScheme>, StoreError> {
        let mut conn = self.connection().await?;
        let raw: Result<Option<String>, _> = self.bounded(conn.get(SCHEME_KEY)).await;
        let raw = self.forget_connection(raw).await?;
        // A garbage value is treated as "no preference" rather than an error.
        Ok(raw.and_then(|v| v.parse().ok()))
    }

    async fn save(&self, scheme: ColorScheme) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let saved = self
            .bounded(conn.set::<_, _, ()>(SCHEME_KEY, scheme.as_str()))
            .await;
        self.forget_connection(saved).await
    }
}

/// In-process store used when no Redis URL is configured, and in tests.
#[derive(Default)]
pub struct MemorySchemeStore {
    value: Mutex<Option<String>>,
}

#[async_trait]
impl SchemeStore for MemorySchemeStore {
    async fn load(&self) -> Result<Option<ColorScheme>, StoreError> {
        let value = self.value.lock().await;
        Ok(value.as_deref().and_then(|v| v.parse().ok()))
    }

    async fn save(&self, scheme: ColorScheme) -> Result<(), StoreError> {
        *self.value.lock().await = Some(scheme.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse_all_names() {
        for v in Variant::ALL {
            assert_eq!(v.as_str().parse::<Variant>().unwrap(), v);
        }
        assert_eq!("  Minimal ".parse::<Variant>().unwrap(), Variant::Minimal);
    }

    #[test]
    fn test_unknown_variant_rejected_and_selection_unchanged() {
        let mut sel = Selection::default();
        sel.select_variant("classic").unwrap();
        let err = sel.select_variant("brutalist").unwrap_err();
        assert_eq!(err, SelectionError::UnknownVariant("brutalist".to_string()));
        assert_eq!(sel.variant, Variant::Classic);
    }

    #[test]
    fn test_theme_color_validation() {
        assert_eq!(ThemeColor::parse("#ABC").unwrap().as_str(), "#abc");
        assert_eq!(ThemeColor::parse(" #10b981 ").unwrap().as_str(), "#10b981");
        assert!(ThemeColor::parse("10b981").is_err());
        assert!(ThemeColor::parse("#12345").is_err());
        assert!(ThemeColor::parse("#ggg").is_err());
        assert!(ThemeColor::parse("red; background: url(x)").is_err());
    }

    #[test]
    fn test_invalid_color_keeps_previous() {
        let mut sel = Selection::default();
        sel.set_theme_color("#ef4444").unwrap();
        assert!(sel.set_theme_color("blue").is_err());
        assert_eq!(sel.theme_color.as_str(), "#ef4444");
    }

    #[test]
    fn test_default_selection() {
        let sel = Selection::default();
        assert_eq!(sel.variant, Variant::Modern);
        assert_eq!(sel.theme_color.as_str(), DEFAULT_THEME_COLOR);
        assert_eq!(sel.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_toggle_scheme_flips() {
        let mut sel = Selection::default();
        assert_eq!(sel.toggle_scheme(), ColorScheme::Dark);
        assert_eq!(sel.toggle_scheme(), ColorScheme::Light);
    }

    #[tokio::test(start_paused = true)]
    async fn test_redis_round_trip_is_bounded() {
        let store = RedisSchemeStore::new(redis::Client::open("redis://127.0.0.1:6379").unwrap());
        let stalled = std::future::pending::<RedisResult<()>>();
        let err = store.bounded(stalled).await.unwrap_err();
        assert!(matches!(err, StoreError::Timeout(t) if t == STORE_TIMEOUT));
    }

    #[tokio::test]
    async fn test_unreachable_redis_fails_instead_of_hanging() {
        let store = RedisSchemeStore::new(redis::Client::open("redis://127.0.0.1:1").unwrap());
        let result = tokio::time::timeout(STORE_TIMEOUT * 2, store.load()).await;
        assert!(result.expect("load must give up on its own").is_err());
        assert!(store.conn.lock().await.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySchemeStore::default();
        assert_eq!(store.load().await.unwrap(), None);
        store.save(ColorScheme::Dark).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(ColorScheme::Dark));
    }
}
