// Configuration module entry point
// Fixed startup configuration for the demo server

use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Minimum severity; records below it are dropped
    pub level: String,
    /// Record encoding ("json" or "text")
    pub format: String,
    /// Output stream ("stdout" or "stderr")
    pub output: String,
}

impl Config {
    /// Build the startup configuration.
    ///
    /// Nothing is read from files or the environment in this version; the
    /// defaults below are the entire configuration surface.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "warn")?
            .set_default("logging.format", "json")?
            .set_default("logging.output", "stdout")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
