//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs. Leptos site options (site
//! root, output name, reload port) come from `[workspace.metadata.leptos]`
//! instead and are not duplicated here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Catalog file name inside the site root.
pub const CATALOG_FILE_NAME: &str = "kidsdata.json";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR {0:?}: expected an IP address")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Explicit catalog path; `None` means `<site root>/kidsdata.json`.
    pub catalog_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// - `PORT`: listen port (default 3000)
    /// - `BIND_ADDR`: listen address (default `0.0.0.0`)
    /// - `CATALOG_FILE`: catalog document checked at startup
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BIND_ADDR` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match value("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
        };
        let bind_addr = match value("BIND_ADDR") {
            None => DEFAULT_BIND_ADDR,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
        };
        let catalog_file = value("CATALOG_FILE").map(PathBuf::from);

        Ok(Self { bind_addr, port, catalog_file })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Catalog path to check, falling back to the one inside `site_root`.
    pub fn catalog_path(&self, site_root: &Path) -> PathBuf {
        self.catalog_file.clone().unwrap_or_else(|| site_root.join(CATALOG_FILE_NAME))
    }
}
