//! Default values for configuration fields.

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8686
}

pub(crate) fn default_workers() -> usize {
    2
}

pub(crate) fn default_api_version() -> String {
    "v1".to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_logs_path() -> String {
    "./logs".to_string()
}

pub(crate) fn default_log_format() -> String {
    "compact".to_string()
}

pub(crate) fn default_max_login_attempts() -> u32 {
    3
}

pub(crate) fn default_lockout_minutes() -> u64 {
    15
}

pub(crate) fn default_otp_ttl_seconds() -> u64 {
    300
}

pub(crate) fn default_otp_max_attempts() -> u32 {
    3
}

pub(crate) fn default_otp_resend_cooldown_seconds() -> u64 {
    60
}

pub(crate) fn default_session_idle_minutes() -> u64 {
    30
}

pub(crate) fn default_session_sweep_interval_seconds() -> u64 {
    30
}

pub(crate) fn default_security_log_capacity() -> usize {
    100
}

pub(crate) fn default_max_auth_attempts_per_min() -> u32 {
    20
}

pub(crate) fn default_rate_limit_cache_ttl_seconds() -> u64 {
    300
}

pub(crate) fn default_rate_limit_cache_max_entries() -> u64 {
    10_000
}

pub(crate) fn default_cors_methods() -> Vec<String> {
    vec![
        "GET".to_string(),
        "POST".to_string(),
        "PUT".to_string(),
        "DELETE".to_string(),
        "OPTIONS".to_string(),
    ]
}

pub(crate) fn default_cors_headers() -> Vec<String> {
    vec![
        "Authorization".to_string(),
        "Content-Type".to_string(),
        "Accept".to_string(),
        "Origin".to_string(),
        "X-Requested-With".to_string(),
    ]
}

pub(crate) fn default_cors_max_age() -> u64 {
    3600
}
