//! Bootstrap configuration
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (folded into the CLI layer by the binary)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Nothing here can change while the server runs; a restart picks up edits.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_DATA_FILE: &str = "api/data.json";
pub const DEFAULT_IMAGES_DIR: &str = "static/img";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Optional TOML configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Interface to bind, e.g. `127.0.0.1`
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Dataset JSON document
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Directory served under `/img`
    #[serde(default)]
    pub images_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl TomlConfig {
    /// Read a TOML config file; a named file that is missing is an error
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config: TomlConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded config file {}", path.display());
        Ok(config)
    }
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_addr: Option<String>,
    pub data_file: Option<PathBuf>,
    pub images_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub images_dir: PathBuf,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::resolve(CliOverrides::default(), None)
    }
}

impl ServerConfig {
    /// Merge CLI overrides over the TOML file over compiled defaults
    pub fn resolve(cli: CliOverrides, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            bind_addr: cli
                .bind_addr
                .or(file.bind_addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: cli.port.or(file.port).unwrap_or(DEFAULT_PORT),
            data_file: cli
                .data_file
                .or(file.data_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            images_dir: cli
                .images_dir
                .or(file.images_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
            log_level: cli.log_level.unwrap_or(file.logging.level),
        }
    }

    /// Socket address the HTTP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind_addr.parse().map_err(|_| {
            Error::Config(format!("Invalid bind address: {}", self.bind_addr))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
