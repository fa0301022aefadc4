pub mod defaults;
mod loader;
mod types;

pub use types::{
    AuthSettings, CorsSettings, LoggingSettings, RateLimitSettings, SecuritySettings,
    ServerConfig, ServerSettings,
};
