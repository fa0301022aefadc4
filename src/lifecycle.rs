//! Server startup and run loop.
//!
//! `bootstrap` builds the shared application state and kicks off the
//! background session sweeper; `run` wires the Actix application and
//! serves until a termination signal arrives.

use crate::{middleware, routes};
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use vermifarm_api::RateLimiter;
use vermifarm_auth::SweeperHandle;
use vermifarm_configs::ServerConfig;
use vermifarm_core::AppContext;

/// Long-lived components built during startup.
pub struct ServerComponents {
    pub rate_limiter: Arc<RateLimiter>,
    pub sweeper: SweeperHandle,
}

/// Build application state and start background services.
pub async fn bootstrap(config: &ServerConfig) -> Result<(ServerComponents, Arc<AppContext>)> {
    let app_context = AppContext::init(config)?;

    let rate_limiter = Arc::new(RateLimiter::with_config(&config.rate_limit));

    // Idle-session sweeper runs until the handle is dropped or aborted
    let sweep_interval = config.auth.session_sweep_interval();
    let sweeper = app_context.sessions().spawn_sweeper(sweep_interval);
    info!(
        "Session sweeper started (interval={}s, idle timeout={}s)",
        sweep_interval.as_secs(),
        config.auth.session_idle().as_secs()
    );

    Ok((
        ServerComponents {
            rate_limiter,
            sweeper,
        },
        app_context,
    ))
}

/// Run the HTTP server until a termination signal is received.
pub async fn run(
    config: &ServerConfig,
    components: ServerComponents,
    app_context: Arc<AppContext>,
) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let rate_limiter = components.rate_limiter.clone();
    let cors_config = config.security.cors.clone();
    let app_context_for_handler = app_context.clone();

    let server = HttpServer::new(move || {
        let ctx = app_context_for_handler.clone();
        App::new()
            .wrap(middleware::request_logger())
            .wrap(middleware::build_cors_from_config(&cors_config))
            .app_data(web::Data::new(ctx.clone()))
            .app_data(web::Data::new(rate_limiter.clone()))
            .configure(move |cfg| routes::configure(cfg, &ctx))
    })
    .bind(&bind_addr)?;

    info!("Listening on http://{}", bind_addr);

    let server = server
        .workers(if config.server.workers == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            config.server.workers
        })
        .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            if let Err(e) = result {
                log::error!("Server task failed: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, initiating graceful shutdown...");

            // Stop accepting new HTTP connections
            server_handle.stop(true).await;

            // Stop the background sweeper
            components.sweeper.abort();
            debug!("Session sweeper stopped");
        }
    }

    info!("Server shut down cleanly");
    Ok(())
}
