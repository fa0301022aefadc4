//! Token bucket implementation for rate limiting
//!
//! Uses a simple token bucket algorithm with continuous refill based on
//! elapsed time, providing smooth rate limiting rather than bursty
//! window-based limits.

use std::time::{Duration, Instant};

/// Token bucket for rate limiting
#[derive(Debug)]
pub struct TokenBucket {
    /// Maximum tokens in the bucket
    capacity: u32,

    /// Current number of tokens
    tokens: u32,

    /// Last refill time
    last_refill: Instant,

    /// Pre-computed tokens per second for fast refill calculation
    tokens_per_sec: f64,
}

impl TokenBucket {
    /// Create a new token bucket
    ///
    /// # Arguments
    /// * `capacity` - Maximum tokens the bucket can hold
    /// * `refill_rate` - Tokens to add per window
    /// * `window` - Duration of the refill window
    #[inline]
    pub fn new(capacity: u32, refill_rate: u32, window: Duration) -> Self {
        let tokens_per_sec = refill_rate as f64 / window.as_secs_f64();
        Self {
            capacity,
            tokens: capacity,
            last_refill: Instant::now(),
            tokens_per_sec,
        }
    }

    /// Try to consume tokens
    ///
    /// Returns `true` if successful, `false` if insufficient tokens.
    #[inline]
    pub fn try_consume(&mut self, tokens: u32) -> bool {
        self.refill();

        if self.tokens >= tokens {
            self.tokens -= tokens;
            true
        } else {
            false
        }
    }

    /// Refill tokens based on elapsed time
    #[inline]
    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);

        // Fast path: if very little time has passed, skip calculation
        if elapsed.as_millis() < 10 {
            return;
        }

        let elapsed_secs = elapsed.as_secs_f64();
        let tokens_to_add = (self.tokens_per_sec * elapsed_secs) as u32;

        if tokens_to_add > 0 {
            self.tokens = self.capacity.min(self.tokens + tokens_to_add);
            self.last_refill = now;
        }
    }
}
