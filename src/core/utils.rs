use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::config::Config;

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_FILE: &str = "config.json";

pub const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
pub const LEDGER_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// Returns the application-specific data directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the JSON configuration file inside `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Resolves the backing ledger file: `EXPENSE_TRACKER_FILE` wins over the
/// configured `ledger_file`. Relative paths stay relative to the working directory.
pub fn ledger_file(config: &Config) -> PathBuf {
    match env::var_os(LEDGER_FILE_ENV) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => config.ledger_file.clone(),
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)
}
