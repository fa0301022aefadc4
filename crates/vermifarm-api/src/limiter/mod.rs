//! Rate limiting for authentication endpoints.

mod rate_limiter;
mod token_bucket;

pub use rate_limiter::RateLimiter;
pub use token_bucket::TokenBucket;
