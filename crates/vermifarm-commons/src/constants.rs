//! Platform-wide authentication constants.
//!
//! These are the compiled-in defaults; most of them can be overridden per
//! deployment through `[auth]` in `config.toml` (see `vermifarm-configs`).

/// Authentication and session defaults.
pub struct AuthConstants;

impl AuthConstants {
    /// Consecutive failed logins before an account is locked.
    pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

    /// Lockout window after too many failed logins, in minutes.
    pub const LOCKOUT_MINUTES: u64 = 15;

    /// OTP code validity window, in seconds.
    pub const OTP_TTL_SECONDS: u64 = 300;

    /// Verification attempts allowed per issued OTP.
    pub const OTP_MAX_ATTEMPTS: u32 = 3;

    /// Cooldown between OTP resend requests, in seconds.
    pub const OTP_RESEND_COOLDOWN_SECONDS: u64 = 60;

    /// OTP codes are exactly this many digits.
    pub const OTP_CODE_LENGTH: usize = 6;

    /// Session inactivity timeout, in minutes.
    pub const SESSION_IDLE_MINUTES: u64 = 30;

    /// Maximum retained security events (ring buffer capacity).
    pub const SECURITY_LOG_CAPACITY: usize = 100;

    /// Length of the opaque temporary token linking login to the OTP step.
    pub const TEMP_TOKEN_LENGTH: usize = 32;

    /// Length of the opaque session token.
    pub const SESSION_TOKEN_LENGTH: usize = 48;
}
