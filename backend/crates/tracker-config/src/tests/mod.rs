
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point TRACKER_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("TRACKER_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Clear every override the loader reads so ambient env can't leak in
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "TRACKER_SERVER_HOST",
        "TRACKER_SERVER_PORT",
        "TRACKER_ASSETS_DEV_DIR",
        "TRACKER_ASSETS_INSTALLED_DIR",
        "TRACKER_LOG_LEVEL",
        "TRACKER_LOG_COLORED",
        "TRACKER_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
