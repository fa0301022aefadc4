//! OTP verification handler
//!
//! POST /v1/api/auth/verify-otp - Verifies the one-time code and issues
//! a session token.

use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use vermifarm_core::AppContext;

use super::map_auth_error_to_response;
use super::models::{AuthErrorResponse, AuthenticatedResponse, UserInfo, VerifyOtpRequest};
use crate::helpers::extract_connection_info;
use crate::limiter::RateLimiter;

/// POST /v1/api/auth/verify-otp
pub async fn verify_otp_handler(
    req: HttpRequest,
    ctx: web::Data<Arc<AppContext>>,
    rate_limiter: web::Data<Arc<RateLimiter>>,
    body: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    let connection_info = extract_connection_info(&req);

    if !rate_limiter.get_ref().check_auth_rate(&connection_info) {
        return HttpResponse::TooManyRequests().json(AuthErrorResponse::new(
            "rate_limited",
            "Too many authentication attempts. Please retry shortly.",
        ));
    }

    let session = match ctx
        .auth()
        .verify_otp(&body.temp_token, &body.code, &connection_info)
        .await
    {
        Ok(session) => session,
        Err(err) => return map_auth_error_to_response(err),
    };

    let user = match ctx.user_repo().get_user_by_phone(&session.phone).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Failed to load user after OTP verification: {}", e);
            return HttpResponse::InternalServerError()
                .json(AuthErrorResponse::new("internal_error", "Authentication failed"));
        },
    };

    HttpResponse::Ok().json(AuthenticatedResponse::new(
        session.token,
        UserInfo::from(&user),
    ))
}
