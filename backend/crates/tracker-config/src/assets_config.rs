use crate::{ConfigError, ConfigErrorResult, DEFAULT_DEV_ASSET_DIR, DEFAULT_INSTALLED_ASSET_DIR};

use std::path::PathBuf;

use serde::Deserialize;

/// Template search paths. The `--dev` flag picks `dev_dir`, otherwise
/// `installed_dir` is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Checkout-relative template directory used during development
    pub dev_dir: String,
    /// System-wide template directory used by packaged installs
    pub installed_dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dev_dir: String::from(DEFAULT_DEV_ASSET_DIR),
            installed_dir: String::from(DEFAULT_INSTALLED_ASSET_DIR),
        }
    }
}

impl AssetsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dev_dir.trim().is_empty() {
            return Err(ConfigError::assets("assets.dev_dir must not be empty"));
        }

        if self.installed_dir.trim().is_empty() {
            return Err(ConfigError::assets(
                "assets.installed_dir must not be empty",
            ));
        }

        Ok(())
    }

    pub fn dir(&self, dev: bool) -> PathBuf {
        if dev {
            PathBuf::from(&self.dev_dir)
        } else {
            PathBuf::from(&self.installed_dir)
        }
    }
}
