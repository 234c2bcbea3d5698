//! HTTP server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::anyhow;
use axum::http::HeaderValue;
use clap::Args;
use tower_http::cors::{Any, CorsLayer};

use crate::TRACING_TARGET_CONFIG;

/// HTTP server configuration.
///
/// # Environment Variables
///
/// - `HOST` - Server host address (default: 127.0.0.1)
/// - `PORT` - Server port (default: 3000, valid range: 1024-65535)
/// - `SHUTDOWN_TIMEOUT` - Graceful shutdown timeout in seconds (default: 30)
/// - `CORS_ALLOWED_ORIGINS` - Comma-separated list of allowed CORS origins
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    ///
    /// Use "127.0.0.1" for localhost only, "0.0.0.0" for all interfaces.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// TCP port number for the server to listen on.
    ///
    /// Must be in the range 1024-65535.
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Maximum time in seconds to wait for graceful shutdown.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,

    /// List of allowed CORS origins.
    ///
    /// If empty, any origin is allowed, which suits a local dashboard.
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns true when the server binds to all interfaces.
    pub fn binds_to_all_interfaces(&self) -> bool {
        self.host.is_unspecified()
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port < 1024 {
            return Err(anyhow!(
                "Port {} is below 1024. Use ports 1024-65535 to avoid requiring root privileges.",
                self.port
            ));
        }

        if self.shutdown_timeout == 0 || self.shutdown_timeout > 300 {
            return Err(anyhow!(
                "Shutdown timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.shutdown_timeout
            ));
        }

        Ok(())
    }

    /// Logs the configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            host = %self.host,
            port = self.port,
            shutdown_timeout_secs = self.shutdown_timeout,
            cors_origins = ?self.cors_allowed_origins,
            "server configuration"
        );
    }

    /// Builds the CORS layer for the configured origins.
    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_allowed_origins.is_empty() {
            return CorsLayer::permissive();
        }

        let origins: Vec<HeaderValue> = self
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            shutdown_timeout: 30,
            cors_allowed_origins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_privileged_ports() {
        let config = ServerConfig {
            port: 80,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.server_addr().to_string(), "127.0.0.1:3000");
        assert!(!config.binds_to_all_interfaces());
    }
}
