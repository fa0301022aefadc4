//! Login handler
//!
//! POST /v1/api/auth/login - Verifies phone and password, issues an OTP
//! challenge (or a session directly when two-factor is disabled).

use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use vermifarm_auth::LoginOutcome;
use vermifarm_core::AppContext;

use super::map_auth_error_to_response;
use super::models::{
    AuthErrorResponse, AuthenticatedResponse, LoginRequest, OtpRequiredResponse, UserInfo,
};
use crate::helpers::extract_connection_info;
use crate::limiter::RateLimiter;

/// POST /v1/api/auth/login
///
/// First step of the login flow. A successful password check returns a
/// temporary token for the OTP step; it never establishes a session on
/// its own unless the account has two-factor disabled.
pub async fn login_handler(
    req: HttpRequest,
    ctx: web::Data<Arc<AppContext>>,
    rate_limiter: web::Data<Arc<RateLimiter>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse {
    let connection_info = extract_connection_info(&req);

    // Rate limit auth attempts by client IP
    if !rate_limiter.get_ref().check_auth_rate(&connection_info) {
        return HttpResponse::TooManyRequests().json(AuthErrorResponse::new(
            "rate_limited",
            "Too many authentication attempts. Please retry shortly.",
        ));
    }

    let outcome = match ctx
        .auth()
        .begin_login(&body.phone, &body.password, &connection_info)
        .await
    {
        Ok(outcome) => outcome,
        Err(err) => return map_auth_error_to_response(err),
    };

    match outcome {
        LoginOutcome::OtpRequired(challenge) => HttpResponse::Ok().json(
            OtpRequiredResponse::new(challenge.temp_token, challenge.expires_in_seconds),
        ),
        LoginOutcome::Authenticated(session) => {
            let user = match ctx.user_repo().get_user_by_phone(&session.phone).await {
                Ok(user) => user,
                Err(e) => {
                    log::error!("Failed to load user after authentication: {}", e);
                    return HttpResponse::InternalServerError()
                        .json(AuthErrorResponse::new("internal_error", "Authentication failed"));
                },
            };
            HttpResponse::Ok().json(AuthenticatedResponse::new(
                session.token,
                UserInfo::from(&user),
            ))
        },
    }
}
