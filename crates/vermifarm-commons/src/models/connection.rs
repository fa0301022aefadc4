//! Connection metadata attached to authentication attempts.

use serde::{Deserialize, Serialize};

/// Client connection information used for audit logging and rate limiting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Remote peer address (or first X-Forwarded-For hop), if known.
    pub remote_addr: Option<String>,
    /// Raw User-Agent header value, if present.
    pub user_agent: Option<String>,
}

impl ConnectionInfo {
    pub fn new(remote_addr: Option<String>, user_agent: Option<String>) -> Self {
        Self {
            remote_addr,
            user_agent,
        }
    }

    /// Whether the peer address resolves to the local host.
    pub fn is_localhost(&self) -> bool {
        match &self.remote_addr {
            Some(addr) => {
                let host = addr.rsplit_once(':').map(|(h, _)| h).unwrap_or(addr.as_str());
                host == "127.0.0.1" || host == "localhost" || host == "::1" || host == "[::1]"
            }
            None => false,
        }
    }

    /// Key used for per-IP rate limiting; "unknown" when no address is available.
    pub fn rate_limit_key(&self) -> &str {
        self.remote_addr.as_deref().unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_detection_handles_ports() {
        let conn = ConnectionInfo::new(Some("127.0.0.1:51820".to_string()), None);
        assert!(conn.is_localhost());

        let conn = ConnectionInfo::new(Some("10.0.0.8:443".to_string()), None);
        assert!(!conn.is_localhost());

        assert!(!ConnectionInfo::default().is_localhost());
    }
}
