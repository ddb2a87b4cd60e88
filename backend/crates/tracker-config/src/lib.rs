mod assets_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use assets_config::AssetsConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DEV_ASSET_DIR: &str = "www";
const DEFAULT_INSTALLED_ASSET_DIR: &str = "/usr/share/tracker/html";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "TRACKER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tracker";
const CONFIG_FILENAME: &str = "config.toml";
