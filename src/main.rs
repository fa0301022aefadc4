// Vermi-Farm server entrypoint
//!
//! The heavy lifting (initialization, middleware wiring, graceful shutdown)
//! lives in dedicated modules so this file remains a thin orchestrator.

use vermifarm_server::{lifecycle, logging};

use anyhow::Result;
use lifecycle::{bootstrap, run};
use log::info;
use vermifarm_configs::ServerConfig;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fallback to defaults when config file missing)
    let config_path = "config.toml";
    let config = match ServerConfig::load_or_default(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("FATAL: Failed to load {}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    // Logging before any other side effects
    let server_log_path = format!("{}/server.log", config.logging.logs_path);
    logging::init_logging(
        &config.logging.level,
        &server_log_path,
        config.logging.log_to_console,
        Some(&config.logging.targets),
        &config.logging.format,
    )?;

    let version = env!("CARGO_PKG_VERSION");
    let commit = env!("GIT_COMMIT_HASH");
    let build_date = env!("BUILD_DATE");
    let branch = env!("GIT_BRANCH");

    info!("Vermi-Farm Server v{}", version);
    info!("  Commit: {}  Branch: {}  Built: {}", commit, branch, build_date);
    info!("Host: {}  Port: {}", config.server.host, config.server.port);

    // Build application state and kick off background services
    let (components, app_context) = bootstrap(&config).await?;

    // Run HTTP server until termination signal is received
    run(&config, components, app_context).await
}
