//! Background eviction task for the rate limiter

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::limiter::RateLimiter;

/// Handle to a running sweep task; aborts the task when dropped
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stops the sweep task
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl RateLimiter {
    /// Spawns a periodic sweep on the current Tokio runtime.
    ///
    /// The task holds only a weak reference, so dropping every strong
    /// handle to the limiter ends the task on its next tick even if
    /// the `SweeperHandle` leaked.
    pub fn start_sweeper(self: &Arc<Self>, period: Duration) -> SweeperHandle {
        let limiter: Weak<RateLimiter> = Arc::downgrade(self);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick fires immediately; skip it so a fresh
            // limiter is not swept before it has served anything.
            interval.tick().await;

            loop {
                interval.tick().await;
                match limiter.upgrade() {
                    Some(limiter) => {
                        limiter.sweep();
                    }
                    None => break,
                }
            }
        });

        SweeperHandle { handle }
    }
}
