//! Application configuration.

use crate::consts::cli_consts::{DEFAULT_CELEBRATION_MS, DEFAULT_PROGRESS_STEP_MS};
use crate::error::ShowcaseError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, time::Duration};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Pause before each step of the progress demo, in milliseconds.
    pub progress_step_ms: u64,
    /// Duration of the balloon animation, in milliseconds.
    pub celebration_ms: u64,
    /// Paint a dark background behind the whole screen.
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_step_ms: DEFAULT_PROGRESS_STEP_MS,
            celebration_ms: DEFAULT_CELEBRATION_MS,
            with_background_color: false,
        }
    }
}

impl Config {
    pub fn progress_step(&self) -> Duration {
        Duration::from_millis(self.progress_step_ms)
    }

    pub fn celebration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an error if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ShowcaseError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ShowcaseError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ShowcaseError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Remove the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), ShowcaseError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Default location: `~/.widget-showcase/config.json`.
pub fn get_config_path() -> Result<PathBuf, ShowcaseError> {
    let home = home::home_dir().ok_or(ShowcaseError::HomeDirNotFound)?;
    Ok(home.join(".widget-showcase").join("config.json"))
}
