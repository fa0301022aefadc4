//! Authentication error response model

use serde::Serialize;

/// Error response body for authentication failures
#[derive(Debug, Serialize)]
pub struct AuthErrorResponse {
    /// Error type identifier (e.g., "invalid_credentials", "account_locked")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Seconds until the operation can be retried (lockouts and cooldowns)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u64>,
}

impl AuthErrorResponse {
    /// Create a new error response
    #[inline]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            retry_after_seconds: None,
        }
    }

    /// Attach a retry hint to the response
    #[inline]
    pub fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after_seconds = Some(seconds);
        self
    }
}
