use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::core::utils::{app_data_dir, config_file_in, ensure_dir};
use crate::currency::DEFAULT_SYMBOL;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration format error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// User preferences for the tracker. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger_file: PathBuf,
    pub export_file: PathBuf,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: PathBuf::from("expenses.csv"),
            export_file: PathBuf::from("export.csv"),
            currency_symbol: DEFAULT_SYMBOL.into(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: config_file_in(&base),
        }
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Loads the configuration, writing the defaults out on first run so
    /// there is a file to edit. A failed write is logged, not fatal.
    pub fn load_or_init(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = Config::default();
        match self.save(&config) {
            Ok(()) => tracing::info!(path = %self.path.display(), "wrote default configuration"),
            Err(err) => tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "could not write default configuration"
            ),
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
