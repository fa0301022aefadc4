//! Shared fixtures for server integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use vermifarm_api::RateLimiter;
use vermifarm_configs::ServerConfig;
use vermifarm_core::AppContext;

pub const ADMIN_PHONE: &str = "0712345678";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const OTP_CODE: &str = "123456";
pub const INITIATOR_PHONE: &str = "0112345678";

/// Build the shared application state the way the server binary does.
pub fn test_state() -> (Arc<AppContext>, Arc<RateLimiter>) {
    let config = ServerConfig::default();
    let ctx = AppContext::init(&config).expect("context init");
    let limiter = Arc::new(RateLimiter::with_config(&config.rate_limit));
    (ctx, limiter)
}
