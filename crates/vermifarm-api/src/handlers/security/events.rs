//! Security event listing handler

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vermifarm_commons::models::SecurityEvent;
use vermifarm_core::AppContext;

/// Query parameters for the event listing
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Maximum number of events to return (defaults to the full buffer)
    pub limit: Option<usize>,
}

/// Response body for the event listing
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<SecurityEvent>,
    pub total: usize,
}

/// GET /v1/api/security/events
///
/// Returns recent security events, newest first. The buffer is bounded,
/// so older events may have been dropped.
pub async fn security_events_handler(
    ctx: web::Data<Arc<AppContext>>,
    query: web::Query<EventsQuery>,
) -> impl Responder {
    let log = ctx.security_log();
    let total = log.len();
    let limit = query.limit.unwrap_or(total).min(total);
    let events = log.recent(limit);
    HttpResponse::Ok().json(EventsResponse { events, total })
}
