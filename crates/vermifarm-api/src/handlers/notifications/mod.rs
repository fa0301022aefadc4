//! Admin notification handlers
//!
//! ## Endpoints
//! - GET /v1/api/notifications - List pending notifications, newest first
//! - POST /v1/api/notifications - Publish an initiator-action notification
//! - POST /v1/api/notifications/{id}/read - Mark a notification as read
//! - POST /v1/api/notifications/{id}/approve - Approve and remove
//! - POST /v1/api/notifications/{id}/reject - Reject and remove
//!
//! Approve and reject require the super admin role.

mod actions;

pub use actions::{
    approve_notification_handler, create_notification_handler, list_notifications_handler,
    mark_read_handler, reject_notification_handler,
};
