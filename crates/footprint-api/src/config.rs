//! # Server Configuration
//!
//! Bind address and port for the `footprintd` binary. Values come from the
//! `FOOTPRINT_BIND` / `FOOTPRINT_PORT` environment variables, with CLI flags
//! taking precedence; unparsable values fall back to the defaults with a
//! warning rather than aborting startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default bind address (loopback).
pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the listener to.
    pub bind: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// `FOOTPRINT_BIND` and `FOOTPRINT_PORT` are consulted; absent or
    /// unparsable values fall back to the defaults (a bad value logs a
    /// warning naming the variable).
    pub fn from_env() -> Self {
        Self {
            bind: env_parsed("FOOTPRINT_BIND", DEFAULT_BIND),
            port: env_parsed("FOOTPRINT_PORT", DEFAULT_PORT),
        }
    }

    /// The socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            port: DEFAULT_PORT,
        }
    }
}

/// Parse an environment variable, warning and falling back on bad values.
fn env_parsed<T: std::str::FromStr>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%var, value = %raw, "unparsable value, using default");
            default
        }),
        Err(_) => default,
    }
}
