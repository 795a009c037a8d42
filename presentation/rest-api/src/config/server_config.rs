use std::env;
use std::time::Duration;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    /// Grace period for in-flight requests once a shutdown signal arrives
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    /// - SHUTDOWN_TIMEOUT_SECS: Graceful shutdown window (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("SERVICE_PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);
        let shutdown_secs = lookup("SHUTDOWN_TIMEOUT_SECS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(10);

        Self {
            ip,
            port,
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: 8080,
            shutdown_timeout: Duration::from_secs(10),
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.shutdown_timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_fall_back_when_port_is_not_a_number() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SERVICE_PORT" => Some("eighty".to_string()),
            "SHUTDOWN_TIMEOUT_SECS" => Some("3".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 8080);
        assert_eq!(config.shutdown_timeout, Duration::from_secs(3));
    }
}
