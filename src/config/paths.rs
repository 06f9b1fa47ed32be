use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "profman";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    profiles_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let data_root = dirs::data_dir()
            .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;

        Self::create(
            config_root.join(APP_DIR),
            data_root.join(APP_DIR).join("profiles"),
        )
    }

    /// Keeps settings and profile directories under a single root.
    pub fn from_root(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        let profiles_dir = root.join("profiles");
        Self::create(root, profiles_dir)
    }

    fn create(config_dir: PathBuf, profiles_dir: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&profiles_dir)?;

        Ok(Self {
            config_dir,
            profiles_dir,
        })
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    pub fn bootstrap_file(&self) -> PathBuf {
        self.config_dir.join("bootstrap.json")
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn profiles_dir(&self) -> &Path {
        &self.profiles_dir
    }
}
