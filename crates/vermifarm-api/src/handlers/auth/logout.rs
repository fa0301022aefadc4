//! Logout handler
//!
//! POST /v1/api/auth/logout - Ends the current session.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use serde_json::json;
use std::sync::Arc;
use vermifarm_auth::Session;
use vermifarm_core::AppContext;

use super::map_auth_error_to_response;
use super::models::AuthErrorResponse;
use crate::helpers::extract_connection_info;

/// POST /v1/api/auth/logout
///
/// Idempotent: logging out a session that already ended still returns 200.
pub async fn logout_handler(req: HttpRequest, ctx: web::Data<Arc<AppContext>>) -> HttpResponse {
    let session = match req.extensions().get::<Session>() {
        Some(session) => session.clone(),
        None => {
            return HttpResponse::Unauthorized()
                .json(AuthErrorResponse::new("unauthorized", "No active session"));
        },
    };

    let connection_info = extract_connection_info(&req);
    match ctx.auth().logout(&session.token, &connection_info) {
        Ok(_was_active) => HttpResponse::Ok().json(json!({ "status": "logged_out" })),
        Err(err) => map_auth_error_to_response(err),
    }
}
