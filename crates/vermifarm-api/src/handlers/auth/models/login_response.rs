//! Login response models

use super::UserInfo;
use serde::Serialize;

/// Response returned when the password check passed and an OTP is pending
#[derive(Debug, Serialize)]
pub struct OtpRequiredResponse {
    /// Always "otp_required"
    pub status: &'static str,
    /// Opaque token identifying the pending login
    pub temp_token: String,
    /// Seconds until the one-time code expires
    pub expires_in_seconds: u64,
}

impl OtpRequiredResponse {
    pub fn new(temp_token: String, expires_in_seconds: u64) -> Self {
        Self {
            status: "otp_required",
            temp_token,
            expires_in_seconds,
        }
    }
}

/// Response returned when a full session has been established
#[derive(Debug, Serialize)]
pub struct AuthenticatedResponse {
    /// Always "authenticated"
    pub status: &'static str,
    /// Bearer token for subsequent requests
    pub session_token: String,
    /// Authenticated user information
    pub user: UserInfo,
}

impl AuthenticatedResponse {
    pub fn new(session_token: String, user: UserInfo) -> Self {
        Self {
            status: "authenticated",
            session_token,
            user,
        }
    }
}
