//! Global appointments configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;
use tracing::warn;

use crate::error::{AppointmentsError, AppointmentsResult};
use crate::storage::FileStorage;
use crate::store::{AppointmentStore, DEFAULT_STORAGE_KEY};

static DEFAULT_DATA_DIR: &str = "~/.local/share/appointments";
static DEFAULT_TITLE: &str = "Appointments";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Configuration at ~/.config/appointments/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Heading shown above the list.
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: default_data_dir(),
            title: default_title(),
            storage_key: default_storage_key(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> AppointmentsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppointmentsError::Config("Could not determine config directory".into()))?
            .join("appointments");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if
    /// there is none yet. Problems fall back to the defaults with a warning.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_at(&path),
            Err(e) => {
                warn!(error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    /// Like `load`, for a config file at `path`.
    pub fn load_at(path: &Path) -> Self {
        if !path.exists() {
            if let Err(e) = Self::create_default_config(path) {
                warn!(path = %path.display(), error = %e, "Could not create default config");
            }
        }

        Self::load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Using default configuration");
            Self::default()
        })
    }

    /// Load config from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppointmentsResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| AppointmentsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AppointmentsError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Store adapter over the configured data directory and key.
    pub fn store(&self) -> AppointmentStore<FileStorage> {
        AppointmentStore::with_key(FileStorage::new(self.data_path()), self.storage_key.clone())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AppointmentsResult<()> {
        let contents = format!(
            "\
# appointments configuration

# Where appointments are stored:
# data_dir = \"{}\"

# Heading shown above the list:
# title = \"{}\"

# Record name inside data_dir:
# storage_key = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_TITLE, DEFAULT_STORAGE_KEY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppointmentsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AppointmentsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
