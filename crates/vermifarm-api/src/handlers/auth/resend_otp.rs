//! OTP resend handler
//!
//! POST /v1/api/auth/resend-otp - Re-issues the one-time code for a
//! pending login, subject to the resend cooldown.

use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use vermifarm_core::AppContext;

use super::map_auth_error_to_response;
use super::models::{AuthErrorResponse, OtpRequiredResponse, ResendOtpRequest};
use crate::helpers::extract_connection_info;
use crate::limiter::RateLimiter;

/// POST /v1/api/auth/resend-otp
pub async fn resend_otp_handler(
    req: HttpRequest,
    ctx: web::Data<Arc<AppContext>>,
    rate_limiter: web::Data<Arc<RateLimiter>>,
    body: web::Json<ResendOtpRequest>,
) -> HttpResponse {
    let connection_info = extract_connection_info(&req);

    if !rate_limiter.get_ref().check_auth_rate(&connection_info) {
        return HttpResponse::TooManyRequests().json(AuthErrorResponse::new(
            "rate_limited",
            "Too many authentication attempts. Please retry shortly.",
        ));
    }

    match ctx.auth().resend_otp(&body.temp_token) {
        Ok(challenge) => HttpResponse::Ok().json(OtpRequiredResponse::new(
            challenge.temp_token,
            challenge.expires_in_seconds,
        )),
        Err(err) => map_auth_error_to_response(err),
    }
}
