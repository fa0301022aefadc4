//! Security event handlers
//!
//! ## Endpoints
//! - GET /v1/api/security/events - Recent security events, newest first

mod events;

pub use events::security_events_handler;
