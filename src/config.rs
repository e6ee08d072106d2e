//! Hub configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PEER_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST: {0}")]
    InvalidHost(String),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid PEER_CHANNEL_CAPACITY: {0} (expected a positive integer)")]
    InvalidCapacity(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Outgoing envelopes buffered per peer before new ones are dropped.
    pub peer_channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            peer_channel_capacity: DEFAULT_PEER_CHANNEL_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Build typed hub config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `PEER_CHANNEL_CAPACITY`: default 256
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first variable that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            std::env::var("PEER_CHANNEL_CAPACITY").ok().as_deref(),
        )
    }

    fn from_vars(host: Option<&str>, port: Option<&str>, capacity: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match host {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
            None => defaults.host,
        };
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => defaults.port,
        };
        let peer_channel_capacity = match capacity {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidCapacity(raw.to_owned()))?,
            None => defaults.peer_channel_capacity,
        };

        Ok(Self { host, port, peer_channel_capacity })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
