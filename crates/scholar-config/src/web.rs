//! Web server configuration

use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

const MAX_BODY_SIZE_10MB: usize = 10 * 1024 * 1024;

/// Settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Serve static assets from this directory instead of the built-in set
    pub static_dir: Option<String>,
    /// Browser origins allowed to call the API cross-origin
    pub cors_origins: Vec<String>,
    /// Largest request body the gateway accepts
    pub max_body_bytes: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: None,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
            max_body_bytes: MAX_BODY_SIZE_10MB,
        }
    }
}

impl WebConfig {
    /// Resolve host and port into the addresses to listen on
    ///
    /// The host may be an IP literal or a name (`localhost`).
    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>> {
        let invalid = || ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port));

        let addrs: Vec<SocketAddr> = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .collect();

        if addrs.is_empty() {
            return Err(invalid());
        }
        Ok(addrs)
    }

    /// Load the `[web]` table from a TOML file
    ///
    /// With no explicit path the default location is tried. A missing file
    /// yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let file: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;

        Ok(file.web)
    }
}

/// On-disk configuration layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `[web]` table
    pub web: WebConfig,
}

/// `~/.config/scholar/config.toml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scholar").join("config.toml"))
}
