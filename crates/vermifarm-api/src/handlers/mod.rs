//! HTTP handlers, grouped by API area.

pub mod auth;
pub mod health;
pub mod notifications;
pub mod security;
