//! Authentication error types.

/// Errors produced by the authentication flow.
///
/// Credential-shaped failures (unknown user, wrong password) are mapped to
/// the same generic message at the API boundary to prevent account
/// enumeration; the distinct variants exist for logging and tests.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// Phone did not match the local `0[17]xxxxxxxx` pattern. Rejected
    /// before any credential check is attempted.
    #[error("Phone number format is invalid")]
    InvalidPhoneFormat,

    /// Unknown phone or wrong password.
    #[error("Invalid phone or password")]
    InvalidCredentials,

    /// Account is inside an active lockout window.
    #[error("Account locked. Try again in {retry_after_seconds} seconds")]
    AccountLocked { retry_after_seconds: u64 },

    /// OTP code did not match; more attempts remain.
    #[error("Invalid code. {remaining_attempts} attempts remaining")]
    OtpInvalid { remaining_attempts: u32 },

    /// OTP validity window elapsed before a correct code was entered.
    #[error("Verification code has expired. Request a new one")]
    OtpExpired,

    /// Attempt limit reached; the temporary token has been discarded.
    #[error("Too many incorrect codes. Start the login again")]
    OtpMaxAttempts,

    /// Resend requested before the cooldown elapsed.
    #[error("Please wait {retry_after_seconds} seconds before requesting a new code")]
    OtpResendCooldown { retry_after_seconds: u64 },

    /// Temporary token is unknown (never issued, already consumed, or
    /// discarded after too many failed codes).
    #[error("Unknown or expired login token")]
    UnknownTempToken,

    /// Session token is unknown or the session idled out.
    #[error("Session has expired")]
    SessionExpired,

    /// No Authorization header on a protected request.
    #[error("Authorization header is required")]
    MissingAuthorization,

    /// Authorization header present but not a usable Bearer token.
    #[error("Malformed Authorization header: {0}")]
    MalformedAuthorization(String),

    /// No account for the given phone.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Password does not meet the length policy.
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Unexpected failure (hashing, task join, poisoned state).
    #[error("Internal authentication error: {0}")]
    Internal(String),
}

/// Result alias for authentication operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;
