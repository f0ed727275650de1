//! Server configuration and line table loading.
//!
//! The server reads its settings from environment variables. A line table
//! may be loaded from a JSON file; without one the built-in Ankara table
//! is used.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::domain::LineTable;

/// Default static assets directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The line table file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The line table file is not a valid line table
    #[error("invalid line table in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// METRO_BIND_ADDR is not a socket address
    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`METRO_BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Optional JSON line table (`METRO_LINES_PATH`).
    pub lines_path: Option<PathBuf>,

    /// Static assets directory (`METRO_STATIC_DIR`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for
    /// missing or empty values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("METRO_BIND_ADDR") {
            Some(addr) => addr
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(addr))?,
            None => default_bind_addr(),
        };

        Ok(Self {
            bind_addr,
            lines_path: get("METRO_LINES_PATH").map(PathBuf::from),
            static_dir: get("METRO_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }

    /// The line table to build the network from.
    ///
    /// Loads `lines_path` if set, otherwise returns the built-in table.
    pub fn line_table(&self) -> Result<LineTable, ConfigError> {
        match &self.lines_path {
            Some(path) => load_line_table(path),
            None => Ok(crate::lines::ankara()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            lines_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

/// Load a line table from a JSON file.
///
/// The file has the form
/// `{"lines": [{"code": "M1", "color": "red", "stations": ["KIZILAY", ...]}]}`.
/// Station names and line codes are validated while parsing; the
/// network builder checks the remaining line rules.
pub fn load_line_table(path: &Path) -> Result<LineTable, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}
