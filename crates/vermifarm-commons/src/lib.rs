//! vermifarm-commons
//!
//! Shared models, typed identifiers, constants, and error types used across
//! all Vermi-Farm crates. Kept dependency-light so every other crate can
//! depend on it without pulling in the web or auth stacks.

pub mod constants;
pub mod errors;
pub mod models;

pub use constants::AuthConstants;
pub use errors::{CommonError, Result};
pub use models::{
    ConnectionInfo, Notification, PhoneNumber, Role, SecurityEvent, SecurityEventKind, User,
    UserId,
};
