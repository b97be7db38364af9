//! Fixed-window request rate limiting keyed by caller identity.
//!
//! The limiter tracks one window per key. A key's window opens on its
//! first request and rolls over once the window length has elapsed;
//! requests beyond the per-window limit are rejected with a retry hint.
//! A background sweeper evicts keys that have gone quiet for a full
//! window so the map does not grow without bound.

mod clock;
mod limiter;
mod sweeper;

pub use clock::{Clock, SystemClock};
pub use limiter::{RateLimitDecision, RateLimiter};
pub use sweeper::SweeperHandle;

#[cfg(any(test, feature = "mock"))]
pub use clock::mock::MockClock;
