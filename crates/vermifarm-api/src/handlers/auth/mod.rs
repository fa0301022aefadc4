//! Authentication handlers for the admin dashboard
//!
//! Implements the two-step login flow (password then OTP) plus session
//! management endpoints.
//!
//! ## Endpoints
//! - POST /v1/api/auth/login - Verify phone and password, issue OTP challenge
//! - POST /v1/api/auth/verify-otp - Verify the one-time code, issue a session
//! - POST /v1/api/auth/resend-otp - Re-issue the one-time code
//! - POST /v1/api/auth/logout - End the current session
//! - GET /v1/api/auth/me - Get current user info

pub mod models;

mod login;
mod logout;
mod me;
mod resend_otp;
mod verify_otp;

pub use login::login_handler;
pub use logout::logout_handler;
pub use me::me_handler;
pub use resend_otp::resend_otp_handler;
pub use verify_otp::verify_otp_handler;

use actix_web::HttpResponse;
use vermifarm_auth::AuthError;

use models::AuthErrorResponse;

/// Map authentication errors to HTTP responses
///
/// Uses generic error messages to prevent user enumeration attacks.
/// Credential-shaped failures (user not found, wrong password) return the
/// same "Invalid phone or password" message.
pub(crate) fn map_auth_error_to_response(err: AuthError) -> HttpResponse {
    match err {
        AuthError::InvalidPhoneFormat => HttpResponse::BadRequest().json(
            AuthErrorResponse::new("invalid_phone", "Phone number format is invalid"),
        ),
        AuthError::InvalidCredentials
        | AuthError::UserNotFound(_)
        | AuthError::WeakPassword(_) => HttpResponse::Unauthorized().json(
            AuthErrorResponse::new("invalid_credentials", "Invalid phone or password"),
        ),
        AuthError::AccountLocked {
            retry_after_seconds,
        } => HttpResponse::Unauthorized().json(
            AuthErrorResponse::new(
                "account_locked",
                format!("Account locked. Try again in {} seconds", retry_after_seconds),
            )
            .with_retry_after(retry_after_seconds),
        ),
        AuthError::OtpInvalid { remaining_attempts } => HttpResponse::Unauthorized().json(
            AuthErrorResponse::new(
                "otp_invalid",
                format!("Invalid code. {} attempts remaining", remaining_attempts),
            ),
        ),
        AuthError::OtpExpired => HttpResponse::Unauthorized().json(AuthErrorResponse::new(
            "otp_expired",
            "Verification code has expired. Request a new one",
        )),
        AuthError::OtpMaxAttempts => HttpResponse::Unauthorized().json(AuthErrorResponse::new(
            "otp_max_attempts",
            "Too many incorrect codes. Start the login again",
        )),
        AuthError::OtpResendCooldown {
            retry_after_seconds,
        } => HttpResponse::TooManyRequests().json(
            AuthErrorResponse::new(
                "otp_resend_cooldown",
                format!(
                    "Please wait {} seconds before requesting a new code",
                    retry_after_seconds
                ),
            )
            .with_retry_after(retry_after_seconds),
        ),
        AuthError::UnknownTempToken => HttpResponse::NotFound().json(AuthErrorResponse::new(
            "unknown_token",
            "Unknown or expired login token",
        )),
        AuthError::SessionExpired => HttpResponse::Unauthorized()
            .json(AuthErrorResponse::new("session_expired", "Session has expired")),
        AuthError::MissingAuthorization => HttpResponse::Unauthorized().json(
            AuthErrorResponse::new("unauthorized", "Authorization header is required"),
        ),
        AuthError::MalformedAuthorization(message) => {
            HttpResponse::Unauthorized().json(AuthErrorResponse::new("unauthorized", message))
        },
        AuthError::Internal(_) => HttpResponse::InternalServerError()
            .json(AuthErrorResponse::new("internal_error", "Authentication failed")),
    }
}
