use super::types::ServerConfig;
use std::fs;
use std::path::Path;

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to compiled-in defaults when the
    /// file does not exist. A malformed file is still a hard error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {:?}",
                self.logging.level,
                valid_levels
            ));
        }

        if !["compact", "json"].contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be 'compact' or 'json'",
                self.logging.format
            ));
        }

        if self.auth.max_login_attempts == 0 {
            return Err(anyhow::anyhow!("auth.max_login_attempts cannot be 0"));
        }
        if self.auth.otp_max_attempts == 0 {
            return Err(anyhow::anyhow!("auth.otp_max_attempts cannot be 0"));
        }
        if self.auth.otp_ttl_seconds == 0 {
            return Err(anyhow::anyhow!("auth.otp_ttl_seconds cannot be 0"));
        }
        if self.auth.session_idle_minutes == 0 {
            return Err(anyhow::anyhow!("auth.session_idle_minutes cannot be 0"));
        }
        if self.auth.security_log_capacity == 0 {
            return Err(anyhow::anyhow!("auth.security_log_capacity cannot be 0"));
        }

        Ok(())
    }
}
