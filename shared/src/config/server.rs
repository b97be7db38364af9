//! HTTP server configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    /// Load server configuration from `SERVER_HOST` / `SERVER_PORT` / `SERVER_WORKERS`
    pub fn from_env() -> Self {
        Self {
            host: env_or("SERVER_HOST", "127.0.0.1"),
            port: env_parse_or("SERVER_PORT", 8080),
            workers: env_parse_or("SERVER_WORKERS", 0),
        }
    }

    /// The address the server should bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
