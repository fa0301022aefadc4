//! vermifarm-api
//!
//! HTTP handlers, session middleware, rate limiting, and route configuration
//! for the Vermi-Farm admin server.

pub mod handlers;
pub mod helpers;
pub mod limiter;
pub mod middleware;
pub mod routes;

pub use limiter::RateLimiter;
pub use middleware::SessionAuth;
