//! Request helpers.

use actix_web::HttpRequest;
use vermifarm_commons::ConnectionInfo;

/// Extract connection metadata from a request.
///
/// Prefers the peer address; falls back to the first X-Forwarded-For hop
/// when the peer address is unavailable (e.g. unit tests).
pub fn extract_connection_info(req: &HttpRequest) -> ConnectionInfo {
    let remote_addr = req
        .peer_addr()
        .map(|addr| addr.to_string())
        .or_else(|| {
            req.headers()
                .get("X-Forwarded-For")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.split(',').next().unwrap_or("").trim().to_string())
                .filter(|s| !s.is_empty())
        });

    let user_agent = req
        .headers()
        .get("User-Agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    ConnectionInfo::new(remote_addr, user_agent)
}

/// Generate a unique request ID for error correlation.
pub fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("req_{}", timestamp)
}
