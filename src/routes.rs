//! Route registration for the server binary.
//!
//! All endpoint wiring lives in `vermifarm-api`; this module only
//! bridges it into the Actix application builder.

use actix_web::web;
use std::sync::Arc;
use vermifarm_core::AppContext;

/// Configure all HTTP routes.
pub fn configure(cfg: &mut web::ServiceConfig, ctx: &Arc<AppContext>) {
    vermifarm_api::routes::configure_routes(cfg, ctx);
}
