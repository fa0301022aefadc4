//! Current user handler
//!
//! GET /v1/api/auth/me - Returns information about the authenticated user.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use std::sync::Arc;
use vermifarm_auth::Session;
use vermifarm_core::AppContext;

use super::models::{AuthErrorResponse, UserInfo};

/// GET /v1/api/auth/me
pub async fn me_handler(req: HttpRequest, ctx: web::Data<Arc<AppContext>>) -> HttpResponse {
    let session = match req.extensions().get::<Session>() {
        Some(session) => session.clone(),
        None => {
            return HttpResponse::Unauthorized()
                .json(AuthErrorResponse::new("unauthorized", "No active session"));
        },
    };

    match ctx.user_repo().get_user_by_phone(&session.phone).await {
        Ok(user) => HttpResponse::Ok().json(UserInfo::from(&user)),
        Err(e) => {
            log::error!("Failed to load user for active session: {}", e);
            HttpResponse::InternalServerError()
                .json(AuthErrorResponse::new("internal_error", "Failed to load user"))
        },
    }
}
