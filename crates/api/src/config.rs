use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::error::AppError;

/// Period of every sampling loop (console and each live connection).
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 6100;

/// Live endpoint configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `6100`).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var | Default   |
    /// |---------|-----------|
    /// | `HOST`  | `0.0.0.0` |
    /// | `PORT`  | `6100`    |
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.into());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a valid u16, got '{raw}'")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AppError::Config(format!("HOST must be an IP address, got '{}'", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_6100() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:6100");
    }

    #[test]
    fn socket_addr_rejects_hostnames() {
        let config = ServerConfig {
            host: "localhost".into(),
            port: 6100,
        };
        assert_matches!(config.socket_addr(), Err(AppError::Config(_)));
    }
}
