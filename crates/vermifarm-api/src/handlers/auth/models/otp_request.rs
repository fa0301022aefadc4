//! OTP verification and resend request models

use serde::{Deserialize, Serialize};

/// Maximum temp token length accepted from clients
const MAX_TOKEN_LENGTH: usize = 64;
/// Maximum OTP code length accepted from clients
const MAX_CODE_LENGTH: usize = 16;

/// OTP verification request body
#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyOtpRequest {
    /// Temp token returned by the login step
    #[serde(deserialize_with = "validate_token_length")]
    pub temp_token: String,
    /// Six digit one-time code
    #[serde(deserialize_with = "validate_code_length")]
    pub code: String,
}

/// OTP resend request body
#[derive(Debug, Deserialize, Serialize)]
pub struct ResendOtpRequest {
    /// Temp token returned by the login step
    #[serde(deserialize_with = "validate_token_length")]
    pub temp_token: String,
}

pub(crate) fn validate_token_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.len() > MAX_TOKEN_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "temp_token exceeds maximum length of {} characters",
            MAX_TOKEN_LENGTH
        )));
    }
    Ok(s)
}

pub(crate) fn validate_code_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.len() > MAX_CODE_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "code exceeds maximum length of {} characters",
            MAX_CODE_LENGTH
        )));
    }
    Ok(s)
}
