use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// The config directory could not be resolved
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message.into())
    }

    /// `[assets]` rejected: an empty `dev_dir` or `installed_dir`
    #[track_caller]
    pub fn assets<S: Into<String>>(message: S) -> Self {
        Self::generic("Assets", message.into())
    }

    /// `[logging]` rejected: `logging.dir` is absolute or climbs out of the
    /// config directory
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::generic("Logging", message.into())
    }

    /// `[server]` rejected: an empty host or a privileged port
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::generic("Server", message.into())
    }

    #[track_caller]
    fn generic(category: &'static str, message: String) -> Self {
        ConfigError::Generic {
            category,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
