//! Per-IP auth attempt limiter
//!
//! Uses Moka cache for automatic TTL-based cleanup of idle entries and high
//! concurrency. Applied before any credential work happens.

use super::token_bucket::TokenBucket;
use moka::sync::Cache;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vermifarm_commons::ConnectionInfo;
use vermifarm_configs::RateLimitSettings;

/// Rate limiter for authentication endpoints, keyed by client IP.
pub struct RateLimiter {
    /// Max auth attempts per minute per IP
    max_auth_attempts_per_min: u32,
    /// Auth attempt buckets - keyed by client IP string
    auth_buckets: Cache<Arc<str>, Arc<Mutex<TokenBucket>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with default config
    pub fn new() -> Self {
        Self::with_config(&RateLimitSettings::default())
    }

    /// Create a new rate limiter from config settings
    pub fn with_config(config: &RateLimitSettings) -> Self {
        let auth_buckets = Cache::builder()
            .max_capacity(config.cache_max_entries)
            .time_to_idle(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Self {
            max_auth_attempts_per_min: config.max_auth_attempts_per_min,
            auth_buckets,
        }
    }

    /// Check if the client may make another auth attempt.
    ///
    /// Localhost (127.0.0.1, ::1) is exempt from rate limiting.
    ///
    /// Returns `true` if allowed, `false` if the per-IP limit is exceeded.
    #[inline]
    pub fn check_auth_rate(&self, conn: &ConnectionInfo) -> bool {
        if conn.is_localhost() {
            return true;
        }

        let key: Arc<str> = Arc::from(conn.rate_limit_key());
        let max = self.max_auth_attempts_per_min;

        let bucket = self.auth_buckets.get_with(key, || {
            Arc::new(Mutex::new(TokenBucket::new(max, max, Duration::from_secs(60))))
        });

        let mut guard = bucket.lock().expect("Rate limiter mutex poisoned");
        guard.try_consume(1)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_per_ip_independently() {
        let limiter = RateLimiter::with_config(&RateLimitSettings {
            max_auth_attempts_per_min: 2,
            ..RateLimitSettings::default()
        });

        let alice = ConnectionInfo::new(Some("203.0.113.1:1000".to_string()), None);
        let bob = ConnectionInfo::new(Some("203.0.113.2:1000".to_string()), None);

        assert!(limiter.check_auth_rate(&alice));
        assert!(limiter.check_auth_rate(&alice));
        assert!(!limiter.check_auth_rate(&alice));

        // A different IP has its own budget.
        assert!(limiter.check_auth_rate(&bob));
    }

    #[test]
    fn localhost_is_exempt() {
        let limiter = RateLimiter::with_config(&RateLimitSettings {
            max_auth_attempts_per_min: 1,
            ..RateLimitSettings::default()
        });

        let local = ConnectionInfo::new(Some("127.0.0.1:50000".to_string()), None);
        for _ in 0..5 {
            assert!(limiter.check_auth_rate(&local));
        }
    }
}
