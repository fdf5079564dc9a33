//! Command-line and environment configuration.

use clap::Parser;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the entry document inside the dist directory.
pub const INDEX_FILE: &str = "index.html";

/// Errors from configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("dist directory not found: {0}")]
    MissingDist(PathBuf),

    #[error("dist directory has no {INDEX_FILE}: {0}")]
    MissingIndex(PathBuf),

    #[error("invalid host address '{host}': {source}")]
    InvalidAddress {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

/// ate-dashboard: static host for the ATE management dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "ate-dashboard")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ATE_DASHBOARD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ATE_DASHBOARD_PORT", default_value_t = 5970)]
    pub port: u16,

    /// Directory containing the built frontend
    #[arg(long, env = "ATE_DASHBOARD_DIST", default_value = "../frontend/dist")]
    pub dist: PathBuf,
}

impl Config {
    /// Socket address built from host and port.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidAddress {
                host: self.host.clone(),
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }

    /// Path of the entry document.
    pub fn index_path(&self) -> PathBuf {
        self.dist.join(INDEX_FILE)
    }

    /// Check that the dist directory can be served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dist(&self.dist)
    }
}

fn check_dist(dist: &Path) -> Result<(), ConfigError> {
    if !dist.is_dir() {
        return Err(ConfigError::MissingDist(dist.to_path_buf()));
    }
    if !dist.join(INDEX_FILE).is_file() {
        return Err(ConfigError::MissingIndex(dist.to_path_buf()));
    }
    Ok(())
}
