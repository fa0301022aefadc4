//! Actionable admin notifications.

use serde::{Deserialize, Serialize};

/// An actionable alert raised by an initiator action (loan disbursement,
/// portfolio transfer, payment) awaiting super-admin review.
///
/// Notifications live in memory until approved or rejected, at which point
/// they are removed from the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    /// Action type, e.g. "loan_disbursement" or "portfolio_transfer".
    pub kind: String,
    pub message: String,
    /// Display name of the admin who initiated the action.
    pub initiator_name: String,
    /// Amount in minor currency units (cents). Zero for amount-less actions.
    pub amount: i64,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub read: bool,
}

impl Notification {
    /// Build a new unread notification with a fresh id and current timestamp.
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        initiator_name: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            id: format!("ntf_{}", uuid::Uuid::new_v4()),
            kind: kind.into(),
            message: message.into(),
            initiator_name: initiator_name.into(),
            amount,
            timestamp: chrono::Utc::now().timestamp_millis(),
            read: false,
        }
    }
}
