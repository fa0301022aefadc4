use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default, alias = "authentication")]
    pub auth: AuthSettings,
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
    #[serde(default)]
    pub security: SecuritySettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            logging: LoggingSettings::default(),
            auth: AuthSettings::default(),
            rate_limit: RateLimitSettings::default(),
            security: SecuritySettings::default(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// API version prefix for endpoints (default: "v1")
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            api_version: default_api_version(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for all log files (default: "./logs")
    #[serde(default = "default_logs_path")]
    pub logs_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    /// "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Optional per-target log level overrides, e.g.
    ///
    /// ```toml
    /// [logging.targets]
    /// actix_web = "warn"
    /// vermifarm_auth = "debug"
    /// ```
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            logs_path: default_logs_path(),
            log_to_console: true,
            format: default_log_format(),
            targets: HashMap::new(),
        }
    }
}

/// Authentication flow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Consecutive failed logins before an account is locked (default: 3)
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: u32,

    /// Lockout window in minutes after too many failed logins (default: 15)
    #[serde(default = "default_lockout_minutes")]
    pub lockout_minutes: u64,

    /// OTP validity window in seconds (default: 300)
    #[serde(default = "default_otp_ttl_seconds")]
    pub otp_ttl_seconds: u64,

    /// Verification attempts allowed per issued OTP (default: 3)
    #[serde(default = "default_otp_max_attempts")]
    pub otp_max_attempts: u32,

    /// Cooldown between OTP resend requests in seconds (default: 60)
    #[serde(default = "default_otp_resend_cooldown_seconds")]
    pub otp_resend_cooldown_seconds: u64,

    /// Session inactivity timeout in minutes (default: 30)
    #[serde(default = "default_session_idle_minutes")]
    pub session_idle_minutes: u64,

    /// How often the session sweeper scans for idle sessions, in seconds
    /// (default: 30)
    #[serde(default = "default_session_sweep_interval_seconds")]
    pub session_sweep_interval_seconds: u64,

    /// Maximum retained security events (default: 100)
    #[serde(default = "default_security_log_capacity")]
    pub security_log_capacity: usize,
}

impl AuthSettings {
    pub fn lockout_duration(&self) -> Duration {
        Duration::from_secs(self.lockout_minutes * 60)
    }

    pub fn otp_ttl(&self) -> Duration {
        Duration::from_secs(self.otp_ttl_seconds)
    }

    pub fn otp_resend_cooldown(&self) -> Duration {
        Duration::from_secs(self.otp_resend_cooldown_seconds)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes * 60)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_seconds)
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            max_login_attempts: default_max_login_attempts(),
            lockout_minutes: default_lockout_minutes(),
            otp_ttl_seconds: default_otp_ttl_seconds(),
            otp_max_attempts: default_otp_max_attempts(),
            otp_resend_cooldown_seconds: default_otp_resend_cooldown_seconds(),
            session_idle_minutes: default_session_idle_minutes(),
            session_sweep_interval_seconds: default_session_sweep_interval_seconds(),
            security_log_capacity: default_security_log_capacity(),
        }
    }
}

/// Rate limiting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Maximum auth attempts per minute per client IP (default: 20)
    #[serde(default = "default_max_auth_attempts_per_min")]
    pub max_auth_attempts_per_min: u32,

    /// TTL for idle rate-limit cache entries in seconds (default: 300)
    #[serde(default = "default_rate_limit_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,

    /// Maximum tracked client IPs (default: 10_000)
    #[serde(default = "default_rate_limit_cache_max_entries")]
    pub cache_max_entries: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_auth_attempts_per_min: default_max_auth_attempts_per_min(),
            cache_ttl_seconds: default_rate_limit_cache_ttl_seconds(),
            cache_max_entries: default_rate_limit_cache_max_entries(),
        }
    }
}

/// Security settings (currently CORS only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecuritySettings {
    #[serde(default)]
    pub cors: CorsSettings,
}

/// CORS configuration that maps directly to actix-cors options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins. Empty list or ["*"] allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Allowed HTTP methods
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,

    /// Allowed HTTP headers. Use ["*"] for any header.
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,

    /// Allow credentials (cookies, authorization headers). Default: true
    #[serde(default = "default_true")]
    pub allow_credentials: bool,

    /// Preflight cache max age in seconds. Default: 3600
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            allow_credentials: true,
            max_age: default_cors_max_age(),
        }
    }
}
