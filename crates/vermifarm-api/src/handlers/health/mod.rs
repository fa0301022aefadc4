//! Health check handlers
//!
//! ## Endpoints
//! - GET /healthz - Kubernetes-style liveness probe
//!
//! Unauthenticated by design for load balancer health checks.

mod healthz;
pub mod models;

pub use healthz::healthz_handler;
