//! Health check response model

use serde::Serialize;

/// Response body for health probes
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server is serving requests
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Number of currently active sessions
    pub active_sessions: usize,
}

impl HealthResponse {
    pub fn ok(version: &'static str, active_sessions: usize) -> Self {
        Self {
            status: "ok",
            version,
            active_sessions,
        }
    }
}
