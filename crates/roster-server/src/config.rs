//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Roster source used when none is configured.
pub const DEFAULT_SOURCE: &str = "data/members.csv";

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Listen on all interfaces by default.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// CSV export holding the roster.
    pub source: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_port_5000() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.source, PathBuf::from("data/members.csv"));
    }
}
