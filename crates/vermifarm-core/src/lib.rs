//! vermifarm-core
//!
//! Application context (dependency wiring) and the notification center.

pub mod app_context;
pub mod notifications;

pub use app_context::AppContext;
pub use notifications::NotificationCenter;
