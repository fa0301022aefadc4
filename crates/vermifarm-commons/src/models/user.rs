//! Administrator account record.

use super::{PhoneNumber, Role, UserId};
use serde::{Deserialize, Serialize};

/// An administrator account.
///
/// Seeded at process start from a fixed in-memory directory and mutated in
/// place on login attempts; never persisted. Timestamps are Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    /// Display name shown in the dashboard and in notifications.
    pub name: String,
    /// Login identifier; unique within the directory.
    pub phone: PhoneNumber,
    pub role: Role,
    /// bcrypt password hash. Never exposed through the API.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When false, login completes without the OTP step.
    pub two_factor_enabled: bool,
    pub email_verified: bool,
    /// Consecutive failed login attempts since the last success.
    pub failed_login_attempts: u32,
    /// Unix timestamp in milliseconds when account lockout expires (None = not locked)
    pub locked_until: Option<i64>,
    /// Unix timestamp in milliseconds of last successful login
    pub last_login_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    /// Whether a lockout window is active at `now_ms`.
    ///
    /// The lock flag is always derived from `locked_until`, so at most one
    /// lockout window can be active per user.
    pub fn is_locked(&self, now_ms: i64) -> bool {
        matches!(self.locked_until, Some(until) if until > now_ms)
    }

    /// Milliseconds remaining in the lockout window at `now_ms`, if any.
    pub fn lockout_remaining_ms(&self, now_ms: i64) -> Option<i64> {
        match self.locked_until {
            Some(until) if until > now_ms => Some(until - now_ms),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(locked_until: Option<i64>) -> User {
        User {
            user_id: UserId::new("u_1"),
            name: "Mary Wanjiku".to_string(),
            phone: PhoneNumber::parse("0712345678").unwrap(),
            role: Role::SuperAdmin,
            password_hash: String::new(),
            two_factor_enabled: true,
            email_verified: true,
            failed_login_attempts: 0,
            locked_until,
            last_login_at: None,
            created_at: 1_730_000_000_000,
            updated_at: 1_730_000_000_000,
        }
    }

    #[test]
    fn lock_state_is_derived_from_deadline() {
        let now = 1_730_000_100_000;
        assert!(!sample_user(None).is_locked(now));
        assert!(!sample_user(Some(now - 1)).is_locked(now));
        assert!(sample_user(Some(now + 60_000)).is_locked(now));
        assert_eq!(
            sample_user(Some(now + 60_000)).lockout_remaining_ms(now),
            Some(60_000)
        );
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let mut user = sample_user(None);
        user.password_hash = "$2b$12$secret".to_string();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("0712345678"));
    }
}
