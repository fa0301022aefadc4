//! User info model

use serde::Serialize;
use vermifarm_commons::models::{PhoneNumber, Role, User, UserId};

/// User info returned in authentication responses
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// Unique user identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Phone number
    pub phone: PhoneNumber,
    /// User role (super_admin, admin_initiator)
    pub role: Role,
    /// Whether OTP verification is required at login
    pub two_factor_enabled: bool,
    /// Last successful login in epoch milliseconds, if any
    pub last_login_at: Option<i64>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            two_factor_enabled: user.two_factor_enabled,
            last_login_at: user.last_login_at,
        }
    }
}
