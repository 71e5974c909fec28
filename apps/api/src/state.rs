use std::sync::Arc;

use crate::config::Config;
use crate::preview::SessionRegistry;
use crate::selection::SchemeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<SessionRegistry>,
    /// Where the light/dark preference is persisted. Redis when `REDIS_URL`
    /// is set, process memory otherwise.
    pub scheme_store: Arc<dyn SchemeStore>,
}

impl AppState {
    pub fn new(config: Config, scheme_store: Arc<dyn SchemeStore>) -> Self {
        AppState {
            config,
            sessions: Arc::new(SessionRegistry::default()),
            scheme_store,
        }
    }
}
