use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::FileConfig`]
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Host/port do not form a socket address
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),
}

/// Result alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
