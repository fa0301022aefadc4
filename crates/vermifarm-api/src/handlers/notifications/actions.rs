//! Notification listing and approval handlers

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use vermifarm_auth::Session;
use vermifarm_commons::{CommonError, Notification};
use vermifarm_core::AppContext;

/// Request body for publishing a notification
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    /// Action type, e.g. "loan_disbursement"
    pub kind: String,
    pub message: String,
    /// Amount in minor currency units; omit for amount-less actions
    #[serde(default)]
    pub amount: i64,
}

/// Response body for listing notifications
#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub pending: usize,
}

fn map_common_error(err: CommonError) -> HttpResponse {
    match err {
        CommonError::NotFound(msg) => {
            HttpResponse::NotFound().json(json!({ "error": "not_found", "message": msg }))
        },
        other => {
            log::error!("Notification operation failed: {}", other);
            HttpResponse::InternalServerError().json(json!({
                "error": "internal_error",
                "message": "Notification operation failed",
            }))
        },
    }
}

/// Resolve the authenticated session or reject with 401.
fn require_session(req: &HttpRequest) -> Result<Session, HttpResponse> {
    req.extensions().get::<Session>().cloned().ok_or_else(|| {
        HttpResponse::Unauthorized()
            .json(json!({ "error": "unauthorized", "message": "No active session" }))
    })
}

/// GET /v1/api/notifications
pub async fn list_notifications_handler(ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    match ctx.notifications().list() {
        Ok(notifications) => {
            let pending = notifications.len();
            HttpResponse::Ok().json(NotificationsResponse {
                notifications,
                pending,
            })
        },
        Err(err) => map_common_error(err),
    }
}

/// POST /v1/api/notifications
///
/// Publishes an initiator-action notification attributed to the calling
/// session's user.
pub async fn create_notification_handler(
    req: HttpRequest,
    ctx: web::Data<Arc<AppContext>>,
    body: web::Json<CreateNotificationRequest>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let notification = Notification::new(
        body.kind.clone(),
        body.message.clone(),
        session.name.clone(),
        body.amount,
    );
    match ctx.notifications().publish(notification) {
        Ok(id) => HttpResponse::Created().json(json!({ "id": id })),
        Err(err) => map_common_error(err),
    }
}

/// POST /v1/api/notifications/{id}/read
pub async fn mark_read_handler(
    ctx: web::Data<Arc<AppContext>>,
    path: web::Path<String>,
) -> impl Responder {
    match ctx.notifications().mark_read(&path.into_inner()) {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(err) => map_common_error(err),
    }
}

/// POST /v1/api/notifications/{id}/approve
///
/// Requires the super admin role; initiators cannot approve actions.
pub async fn approve_notification_handler(
    req: HttpRequest,
    ctx: web::Data<Arc<AppContext>>,
    path: web::Path<String>,
) -> impl Responder {
    resolve_notification(&req, &ctx, &path.into_inner(), true)
}

/// POST /v1/api/notifications/{id}/reject
///
/// Requires the super admin role.
pub async fn reject_notification_handler(
    req: HttpRequest,
    ctx: web::Data<Arc<AppContext>>,
    path: web::Path<String>,
) -> impl Responder {
    resolve_notification(&req, &ctx, &path.into_inner(), false)
}

fn resolve_notification(
    req: &HttpRequest,
    ctx: &web::Data<Arc<AppContext>>,
    id: &str,
    approve: bool,
) -> HttpResponse {
    let session = match require_session(req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if !session.role.can_approve() {
        return HttpResponse::Forbidden().json(json!({
            "error": "forbidden",
            "message": "Approving or rejecting actions requires the super admin role",
        }));
    }

    let result = if approve {
        ctx.notifications().approve(id)
    } else {
        ctx.notifications().reject(id)
    };
    match result {
        Ok(notification) => HttpResponse::Ok().json(json!({
            "status": if approve { "approved" } else { "rejected" },
            "notification": notification,
        })),
        Err(err) => map_common_error(err),
    }
}
