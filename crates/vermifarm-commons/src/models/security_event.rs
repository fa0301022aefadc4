//! Append-only security audit events.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Kind of security event recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventKind {
    LoginSuccess,
    LoginFailed,
    Logout,
    PasswordReset,
    AccountLocked,
}

impl SecurityEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityEventKind::LoginSuccess => "login_success",
            SecurityEventKind::LoginFailed => "login_failed",
            SecurityEventKind::Logout => "logout",
            SecurityEventKind::PasswordReset => "password_reset",
            SecurityEventKind::AccountLocked => "account_locked",
        }
    }
}

/// A single entry in the bounded security audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: String,
    pub kind: SecurityEventKind,
    /// Absent for events that could not be tied to a known account
    /// (e.g. failed login with an unknown phone).
    pub user_id: Option<UserId>,
    /// Phone number as submitted, for correlating failed attempts.
    pub phone: Option<String>,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl SecurityEvent {
    /// Build an event with a fresh id and the current timestamp.
    pub fn now(kind: SecurityEventKind, user_id: Option<UserId>, phone: Option<String>) -> Self {
        Self {
            id: format!("evt_{}", uuid::Uuid::new_v4()),
            kind,
            user_id,
            phone,
            timestamp: chrono::Utc::now().timestamp_millis(),
            ip_address: None,
            user_agent: None,
        }
    }

    /// Attach connection metadata.
    pub fn with_connection(mut self, conn: &super::ConnectionInfo) -> Self {
        self.ip_address = conn.remote_addr.clone();
        self.user_agent = conn.user_agent.clone();
        self
    }
}
