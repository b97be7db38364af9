//! Clock abstraction so limiter behavior can be tested without sleeping

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Production clock backed by `SystemTime`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::Clock;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Manually advanced clock for deterministic tests
    #[derive(Debug, Clone, Default)]
    pub struct MockClock {
        now: Arc<AtomicU64>,
    }

    impl MockClock {
        pub fn new(start_millis: u64) -> Self {
            Self {
                now: Arc::new(AtomicU64::new(start_millis)),
            }
        }

        pub fn advance(&self, millis: u64) {
            self.now.fetch_add(millis, Ordering::SeqCst);
        }

        pub fn set(&self, millis: u64) {
            self.now.store(millis, Ordering::SeqCst);
        }
    }

    impl Clock for MockClock {
        fn now_millis(&self) -> u64 {
            self.now.load(Ordering::SeqCst)
        }
    }
}
