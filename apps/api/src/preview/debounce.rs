use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Single-slot debounce timer.
///
/// At most one deadline is pending. `schedule` replaces it, `cancel` discards
/// it. `fired` resolves once the deadline passes and never resolves while
/// nothing is pending, so it can sit in a `select!` loop unconditionally.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// (Re)starts the countdown from now.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drops the pending deadline, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Waits for the pending deadline and clears it.
    ///
    /// Cancel-safe: if the future is dropped before completion the deadline
    /// stays pending.
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let mut d = Debouncer::new(DELAY);
        d.schedule();
        let start = Instant::now();
        d.fired().await;
        assert_eq!(start.elapsed(), DELAY);
        assert!(!d.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_pushes_deadline_back() {
        let mut d = Debouncer::new(DELAY);
        d.schedule();
        assert!(timeout(Duration::from_millis(300), d.fired()).await.is_err());

        // Still pending after the timed-out wait; restart the countdown.
        assert!(d.is_pending());
        d.schedule();
        assert!(timeout(Duration::from_millis(300), d.fired()).await.is_err());
        assert!(timeout(Duration::from_millis(300), d.fired()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_never_fires() {
        let mut d = Debouncer::new(DELAY);
        assert!(timeout(Duration::from_secs(60), d.fired()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_deadline() {
        let mut d = Debouncer::new(DELAY);
        assert!(!d.cancel());
        d.schedule();
        assert!(d.cancel());
        assert!(timeout(Duration::from_secs(5), d.fired()).await.is_err());
    }
}
