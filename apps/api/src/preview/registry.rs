//! Live preview sessions keyed by id, with idle expiry.
//!
//! Editors that close the tab never send `DELETE`, so every lookup stamps the
//! session as touched and a background sweep drops the ones left idle.
//! Dropping the last handle stops the session task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::preview::SessionHandle;

/// Longest pause between sweeps, however long the idle timeout.
const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(60);

struct TrackedSession {
    handle: SessionHandle,
    last_touched: Instant,
}

#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, TrackedSession>>,
}

impl SessionRegistry {
    pub async fn insert(&self, handle: SessionHandle) {
        let tracked = TrackedSession {
            handle,
            last_touched: Instant::now(),
        };
        self.sessions.write().await.insert(tracked.handle.id(), tracked);
    }

    /// Looks a session up and marks it as in use.
    pub async fn touch(&self, id: Uuid) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let tracked = sessions.get_mut(&id)?;
        tracked.last_touched = Instant::now();
        Some(tracked.handle.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.write().await.remove(&id).map(|t| t.handle)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session untouched for longer than `idle`. Returns their ids.
    pub async fn expire_idle(&self, idle: Duration) -> Vec<Uuid> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, t)| now.duration_since(t.last_touched) > idle)
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            sessions.remove(id);
        }
        expired
    }
}

/// Spawns the periodic idle sweep.
pub fn spawn_idle_sweeper(registry: Arc<SessionRegistry>, idle: Duration) -> JoinHandle<()> {
    let period = idle.min(MAX_SWEEP_PERIOD).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let expired = registry.expire_idle(idle).await;
            if expired.is_empty() {
                debug!("Idle sweep: nothing to expire");
            } else {
                let remaining = registry.len().await;
                info!(
                    count = expired.len(),
                    remaining = remaining,
                    "Expired idle preview sessions"
                );
            }
        }
    })
}
