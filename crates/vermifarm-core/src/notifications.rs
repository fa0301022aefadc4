//! Actionable admin notification center.

use std::sync::RwLock;
use vermifarm_commons::{CommonError, Notification, Result};

/// In-memory store of pending initiator-action notifications.
///
/// A notification exists from the moment an initiator action is published
/// until a super admin approves or rejects it; both decisions remove it.
pub struct NotificationCenter {
    notifications: RwLock<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            notifications: RwLock::new(Vec::new()),
        }
    }

    /// Publish a new notification, returning its id.
    pub fn publish(&self, notification: Notification) -> Result<String> {
        let id = notification.id.clone();
        let mut notifications = self
            .notifications
            .write()
            .map_err(|e| CommonError::internal(format!("notification store poisoned: {}", e)))?;
        log::info!(
            "Notification {} published: {} by {}",
            id,
            notification.kind,
            notification.initiator_name
        );
        notifications.push(notification);
        Ok(id)
    }

    /// All pending notifications, newest first.
    pub fn list(&self) -> Result<Vec<Notification>> {
        let notifications = self
            .notifications
            .read()
            .map_err(|e| CommonError::internal(format!("notification store poisoned: {}", e)))?;
        let mut out: Vec<Notification> = notifications.clone();
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(out)
    }

    /// Mark a notification as read without resolving it.
    pub fn mark_read(&self, id: &str) -> Result<Notification> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|e| CommonError::internal(format!("notification store poisoned: {}", e)))?;
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                Ok(n.clone())
            }
            None => Err(CommonError::not_found(format!("notification '{}'", id))),
        }
    }

    /// Approve a notification, removing it from the center.
    pub fn approve(&self, id: &str) -> Result<Notification> {
        self.resolve(id, "approved")
    }

    /// Reject a notification, removing it from the center.
    pub fn reject(&self, id: &str) -> Result<Notification> {
        self.resolve(id, "rejected")
    }

    /// Number of pending notifications.
    pub fn pending_count(&self) -> usize {
        self.notifications
            .read()
            .map(|n| n.len())
            .unwrap_or_default()
    }

    fn resolve(&self, id: &str, decision: &str) -> Result<Notification> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|e| CommonError::internal(format!("notification store poisoned: {}", e)))?;
        match notifications.iter().position(|n| n.id == id) {
            Some(idx) => {
                let notification = notifications.remove(idx);
                log::info!("Notification {} {}: {}", id, decision, notification.kind);
                Ok(notification)
            }
            None => Err(CommonError::not_found(format!("notification '{}'", id))),
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
