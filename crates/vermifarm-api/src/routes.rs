//! API routes configuration
//!
//! All endpoints use the /v1 version prefix:
//! - GET  /healthz - Liveness probe (also at /v1/api/healthz)
//! - POST /v1/api/auth/login - Verify phone and password
//! - POST /v1/api/auth/verify-otp - Verify the one-time code
//! - POST /v1/api/auth/resend-otp - Re-issue the one-time code
//! - POST /v1/api/auth/logout - End the current session (Bearer token)
//! - GET  /v1/api/auth/me - Current user info (Bearer token)
//! - GET  /v1/api/security/events - Recent security events (Bearer token)
//! - GET/POST /v1/api/notifications[...] - Admin notifications (Bearer token)

use actix_web::web;
use std::sync::Arc;
use vermifarm_core::AppContext;

use crate::handlers;
use crate::middleware::SessionAuth;

/// Configure API routes.
///
/// The session middleware is applied per-scope so the login, OTP, and
/// health endpoints stay reachable without a token.
pub fn configure_routes(cfg: &mut web::ServiceConfig, ctx: &Arc<AppContext>) {
    let session_auth = || SessionAuth::new(ctx.auth().clone());

    cfg.route("/healthz", web::get().to(handlers::health::healthz_handler))
        .service(
            web::scope("/v1/api")
                .route("/healthz", web::get().to(handlers::health::healthz_handler))
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(handlers::auth::login_handler))
                        .route(
                            "/verify-otp",
                            web::post().to(handlers::auth::verify_otp_handler),
                        )
                        .route(
                            "/resend-otp",
                            web::post().to(handlers::auth::resend_otp_handler),
                        )
                        .service(
                            web::scope("")
                                .wrap(session_auth())
                                .route("/logout", web::post().to(handlers::auth::logout_handler))
                                .route("/me", web::get().to(handlers::auth::me_handler)),
                        ),
                )
                .service(
                    web::scope("/security").wrap(session_auth()).route(
                        "/events",
                        web::get().to(handlers::security::security_events_handler),
                    ),
                )
                .service(
                    web::scope("/notifications")
                        .wrap(session_auth())
                        .route(
                            "",
                            web::get().to(handlers::notifications::list_notifications_handler),
                        )
                        .route(
                            "",
                            web::post().to(handlers::notifications::create_notification_handler),
                        )
                        .route(
                            "/{id}/read",
                            web::post().to(handlers::notifications::mark_read_handler),
                        )
                        .route(
                            "/{id}/approve",
                            web::post().to(handlers::notifications::approve_notification_handler),
                        )
                        .route(
                            "/{id}/reject",
                            web::post().to(handlers::notifications::reject_notification_handler),
                        ),
                ),
        );
}
