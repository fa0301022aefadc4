//! Liveness probe handler

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use vermifarm_core::AppContext;

use super::models::HealthResponse;

/// GET /healthz - Kubernetes-style liveness probe
///
/// Returns 200 OK whenever the server is running. No authentication
/// required so load balancers can poll it.
pub async fn healthz_handler(ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok(
        env!("CARGO_PKG_VERSION"),
        ctx.sessions().active_count(),
    ))
}
