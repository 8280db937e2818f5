//! Host configuration parsed from environment variables.
//!
//! Leptos' own options (site root, output name) come from the workspace
//! manifest via `get_configuration`; this only covers where to listen.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read `PORT` (default 3000) and `BIND_ADDR` (default `0.0.0.0`).
    ///
    /// # Errors
    ///
    /// Returns an error when either variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match get("BIND_ADDR").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => DEFAULT_BIND_ADDR,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
