//! Sliding-window login rate limiting.
//!
//! Keyed by a client identifier (typically the remote IP), the limiter
//! keeps an ordered sequence of attempt timestamps per key, pruned lazily
//! to the trailing window on each check. Every call to [`LoginRateLimiter::allow`]
//! counts as an attempt whether or not the login later succeeds - the
//! point is to throttle brute force regardless of credential correctness.
//!
//! The timestamp map is owned by the limiter behind a single coarse lock;
//! contention is negligible at login volumes.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::config::RateLimitConfig;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the attempt may proceed.
    pub permitted: bool,
    /// How long the caller should wait before retrying; zero when
    /// permitted.
    pub retry_after: Duration,
}

impl RateLimitDecision {
    /// Retry-after as fractional seconds, for `Retry-After`-style
    /// responses.
    #[must_use]
    pub fn retry_after_secs(&self) -> f64 {
        self.retry_after.as_secs_f64()
    }
}

/// In-memory sliding-window rate limiter keyed by a string identifier.
#[derive(Debug)]
pub struct LoginRateLimiter {
    max_requests: usize,
    window: Duration,
    attempts: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl LoginRateLimiter {
    /// Create a limiter allowing `max_requests` attempts per key within
    /// a trailing `window`.
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Create a limiter from the configured knobs.
    #[must_use]
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_attempts, config.window)
    }

    /// Record an attempt for `key` and decide whether it is allowed.
    ///
    /// Evicts timestamps older than the window, denies with a
    /// retry-after hint when the remaining count has reached the limit,
    /// and otherwise records the attempt. The whole check-evict-record
    /// sequence runs inside one critical section, so concurrent callers
    /// for the same key cannot overshoot the limit.
    pub fn allow(&self, key: &str) -> RateLimitDecision {
        self.allow_at(key, Instant::now())
    }

    fn allow_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        let mut attempts = self
            .attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let window_attempts = attempts.entry(key.to_string()).or_default();

        while let Some(&oldest) = window_attempts.front() {
            if now.duration_since(oldest) >= self.window {
                window_attempts.pop_front();
            } else {
                break;
            }
        }

        if window_attempts.len() >= self.max_requests {
            let elapsed = window_attempts
                .front()
                .map_or(Duration::ZERO, |&oldest| now.duration_since(oldest));
            let retry_after = self.window.saturating_sub(elapsed);
            tracing::warn!(
                key,
                retry_after_secs = retry_after.as_secs_f64(),
                "login rate limit exceeded"
            );
            return RateLimitDecision {
                permitted: false,
                retry_after,
            };
        }

        window_attempts.push_back(now);
        RateLimitDecision {
            permitted: true,
            retry_after: Duration::ZERO,
        }
    }
}
