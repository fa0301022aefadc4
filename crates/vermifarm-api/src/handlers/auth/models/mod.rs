//! Request/response models for authentication endpoints.

mod error_response;
mod login_request;
mod login_response;
mod otp_request;
mod user_info;

pub use error_response::AuthErrorResponse;
pub use login_request::LoginRequest;
pub use login_response::{AuthenticatedResponse, OtpRequiredResponse};
pub use otp_request::{ResendOtpRequest, VerifyOtpRequest};
pub use user_info::UserInfo;
