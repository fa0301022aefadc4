//! vermifarm-configs
//!
//! Server configuration types and loader for the Vermi-Farm platform.

pub mod config;

pub use config::*;
