//! Core fixed-window limiter state and admission check

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::clock::{Clock, SystemClock};

/// Per-key tracking state.
///
/// `window_start_ms` anchors the current counting window; `last_seen_ms`
/// records the most recent admitted request and drives sweep eviction.
/// Rejected requests deliberately leave `last_seen_ms` untouched so a
/// key that only ever gets rejected still ages out.
#[derive(Debug, Clone, Copy)]
struct KeyEntry {
    count: u32,
    window_start_ms: u64,
    last_seen_ms: u64,
}

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request admitted; `remaining` is the budget left in this window
    Allowed { remaining: u32 },
    /// Request rejected; retry after the current window ends
    Rejected { retry_after_secs: u64 },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed { .. })
    }
}

struct LimiterState {
    entries: HashMap<String, KeyEntry>,
    /// Set once the tracked-key soft cap has been logged, cleared when
    /// a sweep brings the map back under the cap
    capacity_warned: bool,
}

/// Fixed-window rate limiter over an in-process key map.
///
/// All state lives behind a single mutex, so a check is atomic: two
/// concurrent requests for the same key can never both claim the last
/// slot in a window.
pub struct RateLimiter {
    window_ms: u64,
    max_tracked_keys: usize,
    state: Mutex<LimiterState>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Creates a limiter with the given window length, using the system clock
    pub fn new(window_ms: u64, max_tracked_keys: usize) -> Self {
        Self::with_clock(window_ms, max_tracked_keys, Arc::new(SystemClock))
    }

    /// Creates a limiter with an injected clock
    pub fn with_clock(window_ms: u64, max_tracked_keys: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            window_ms,
            max_tracked_keys,
            state: Mutex::new(LimiterState {
                entries: HashMap::new(),
                capacity_warned: false,
            }),
            clock,
        }
    }

    /// Window length in milliseconds
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Checks whether a request for `key` is admitted under `limit`
    /// requests per window.
    ///
    /// The first request for a key, or the first after its window has
    /// elapsed, opens a fresh window anchored at the current time.
    pub fn check(&self, key: &str, limit: u32) -> RateLimitDecision {
        let now = self.clock.now_millis();
        let window_ms = self.window_ms;
        let mut state = self.lock_state();

        if let Some(entry) = state.entries.get_mut(key) {
            if now.saturating_sub(entry.window_start_ms) < window_ms {
                return if entry.count < limit {
                    entry.count += 1;
                    entry.last_seen_ms = now;
                    RateLimitDecision::Allowed {
                        remaining: limit - entry.count,
                    }
                } else {
                    let window_end = entry.window_start_ms + window_ms;
                    let remaining_ms = window_end.saturating_sub(now);
                    RateLimitDecision::Rejected {
                        retry_after_secs: remaining_ms.div_ceil(1000).max(1),
                    }
                };
            }

            // Window elapsed, reopen it in place
            entry.count = 1;
            entry.window_start_ms = now;
            entry.last_seen_ms = now;
            return RateLimitDecision::Allowed {
                remaining: limit.saturating_sub(1),
            };
        }

        state.entries.insert(
            key.to_owned(),
            KeyEntry {
                count: 1,
                window_start_ms: now,
                last_seen_ms: now,
            },
        );

        let tracked = state.entries.len();
        if tracked > self.max_tracked_keys && !state.capacity_warned {
            state.capacity_warned = true;
            tracing::warn!(
                tracked_keys = tracked,
                max_tracked_keys = self.max_tracked_keys,
                "rate limiter key map exceeded soft capacity"
            );
        }

        RateLimitDecision::Allowed {
            remaining: limit.saturating_sub(1),
        }
    }

    /// Evicts keys not seen for at least one full window. Returns the
    /// number of evicted keys.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now_millis();
        let mut state = self.lock_state();

        let before = state.entries.len();
        let window_ms = self.window_ms;
        state
            .entries
            .retain(|_, entry| now.saturating_sub(entry.last_seen_ms) < window_ms);
        let evicted = before - state.entries.len();

        if state.entries.len() <= self.max_tracked_keys {
            state.capacity_warned = false;
        }

        if evicted > 0 {
            tracing::debug!(evicted, remaining = state.entries.len(), "rate limiter sweep");
        }
        evicted
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.lock_state().entries.len()
    }

    fn lock_state(&self) -> MutexGuard<'_, LimiterState> {
        // A poisoned lock only means a panic mid-check; the map is
        // still structurally sound, so keep serving.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::super::clock::mock::MockClock;
    use super::*;

    fn limiter_at(window_ms: u64, clock: &MockClock) -> RateLimiter {
        RateLimiter::with_clock(window_ms, 500, Arc::new(clock.clone()))
    }

    #[test]
    fn test_burst_up_to_limit_then_rejected() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        for i in 0..5 {
            let decision = limiter.check("10.0.0.1", 5);
            assert_eq!(decision, RateLimitDecision::Allowed { remaining: 4 - i });
        }
        assert!(!limiter.check("10.0.0.1", 5).is_allowed());
    }

    #[test]
    fn test_window_rollover_admits_again() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        for _ in 0..5 {
            assert!(limiter.check("10.0.0.1", 5).is_allowed());
        }
        assert!(!limiter.check("10.0.0.1", 5).is_allowed());

        // 1100ms after the first call the window anchored at t=0 has
        // elapsed, so the key gets a fresh window.
        clock.set(1100);
        assert_eq!(
            limiter.check("10.0.0.1", 5),
            RateLimitDecision::Allowed { remaining: 4 }
        );
    }

    #[test]
    fn test_two_per_second_scenario() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        assert!(limiter.check("10.0.0.1", 2).is_allowed());
        clock.set(100);
        assert!(limiter.check("10.0.0.1", 2).is_allowed());
        clock.set(200);
        assert!(!limiter.check("10.0.0.1", 2).is_allowed());
        clock.set(1100);
        assert!(limiter.check("10.0.0.1", 2).is_allowed());
    }

    #[test]
    fn test_swept_key_starts_fresh() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        limiter.check("10.0.0.1", 2);

        clock.set(1000);
        assert_eq!(limiter.sweep(), 1);

        clock.set(1001);
        assert_eq!(
            limiter.check("10.0.0.1", 2),
            RateLimitDecision::Allowed { remaining: 1 }
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        for _ in 0..3 {
            assert!(limiter.check("10.0.0.1", 3).is_allowed());
        }
        assert!(!limiter.check("10.0.0.1", 3).is_allowed());
        assert!(limiter.check("10.0.0.2", 3).is_allowed());
    }

    #[test]
    fn test_retry_after_reflects_window_remaining() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(60_000, &clock);

        for _ in 0..2 {
            limiter.check("10.0.0.1", 2);
        }

        clock.set(12_400);
        match limiter.check("10.0.0.1", 2) {
            RateLimitDecision::Rejected { retry_after_secs } => {
                // 47_600ms remain, rounded up to whole seconds
                assert_eq!(retry_after_secs, 48);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_retry_after_is_at_least_one_second() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        limiter.check("10.0.0.1", 1);
        clock.set(999);
        match limiter.check("10.0.0.1", 1) {
            RateLimitDecision::Rejected { retry_after_secs } => {
                assert_eq!(retry_after_secs, 1);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_sweep_evicts_stale_keeps_fresh() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        limiter.check("stale", 5);
        clock.set(600);
        limiter.check("fresh", 5);

        clock.set(1000);
        let evicted = limiter.sweep();
        assert_eq!(evicted, 1);
        assert_eq!(limiter.tracked_keys(), 1);

        // The surviving key keeps its window state
        for _ in 0..4 {
            assert!(limiter.check("fresh", 5).is_allowed());
        }
        assert!(!limiter.check("fresh", 5).is_allowed());
    }

    #[test]
    fn test_rejections_do_not_keep_key_alive() {
        let clock = MockClock::new(0);
        let limiter = limiter_at(1000, &clock);

        limiter.check("10.0.0.1", 1);
        clock.set(900);
        assert!(!limiter.check("10.0.0.1", 1).is_allowed());

        // Last admitted request was at t=0, so a sweep at t=1000
        // evicts despite the later rejection.
        clock.set(1000);
        assert_eq!(limiter.sweep(), 1);
        assert_eq!(limiter.tracked_keys(), 0);
    }

    #[test]
    fn test_soft_capacity_is_not_enforced() {
        let clock = MockClock::new(0);
        let limiter = RateLimiter::with_clock(1000, 2, Arc::new(clock.clone()));

        assert!(limiter.check("a", 5).is_allowed());
        assert!(limiter.check("b", 5).is_allowed());
        assert!(limiter.check("c", 5).is_allowed());
        assert_eq!(limiter.tracked_keys(), 3);
    }

    #[test]
    fn test_concurrent_checks_never_exceed_limit() {
        let clock = MockClock::new(0);
        let limiter = Arc::new(limiter_at(60_000, &clock));

        let mut handles = Vec::new();
        for _ in 0..32 {
            let limiter = Arc::clone(&limiter);
            handles.push(std::thread::spawn(move || {
                let mut admitted = 0u32;
                for _ in 0..8 {
                    if limiter.check("shared", 10).is_allowed() {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }

        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 10);
    }
}
