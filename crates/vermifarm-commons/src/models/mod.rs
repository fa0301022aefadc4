//! Data models shared across the platform.

mod connection;
mod notification;
mod phone;
mod role;
mod security_event;
mod user;
mod user_id;

pub use connection::ConnectionInfo;
pub use notification::Notification;
pub use phone::PhoneNumber;
pub use role::Role;
pub use security_event::{SecurityEvent, SecurityEventKind};
pub use user::User;
pub use user_id::UserId;
