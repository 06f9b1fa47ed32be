use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Process-wide keys persisted across restarts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SettingsKey {
    LoggedInProfile,
    ActiveProfiles,
    DeleteProfile,
    RenameProfile,
}

impl SettingsKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SettingsKey::LoggedInProfile => "LoggedInProfile",
            SettingsKey::ActiveProfiles => "ActiveProfiles",
            SettingsKey::DeleteProfile => "DeleteProfile",
            SettingsKey::RenameProfile => "RenameProfile",
        }
    }
}

/// Durable key-value store. An absent key reads as `Ok(None)`.
pub trait SettingsStore {
    fn get(&self, key: SettingsKey) -> AppResult<Option<Value>>;
    fn save(&self, key: SettingsKey, value: Value) -> AppResult<()>;
    fn delete(&self, key: SettingsKey) -> AppResult<()>;

    fn get_string(&self, key: SettingsKey) -> AppResult<Option<String>> {
        match self.get(key)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(AppError::Settings(format!(
                "expected string for {}, found {other}",
                key.as_str()
            ))),
        }
    }

    fn get_list(&self, key: SettingsKey) -> AppResult<Option<Vec<String>>> {
        match self.get(key)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value).map(Some).map_err(|err| {
                AppError::Settings(format!("expected string list for {}: {err}", key.as_str()))
            }),
        }
    }

    fn save_string(&self, key: SettingsKey, value: &str) -> AppResult<()> {
        self.save(key, Value::String(value.to_string()))
    }

    fn save_list(&self, key: SettingsKey, values: &[String]) -> AppResult<()> {
        self.save(key, serde_json::to_value(values)?)
    }
}

/// Settings kept as a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> AppResult<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|err| {
            AppError::Settings(format!("malformed {}: {err}", self.path.display()))
        })
    }

    /// Like `read`, but a malformed file is replaced rather than blocking the write.
    fn read_for_update(&self) -> AppResult<BTreeMap<String, Value>> {
        match self.read() {
            Err(AppError::Settings(message)) => {
                tracing::warn!(%message, "discarding malformed settings");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write(&self, values: &BTreeMap<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, payload)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: SettingsKey) -> AppResult<Option<Value>> {
        let mut values = self.read()?;
        Ok(values.remove(key.as_str()))
    }

    fn save(&self, key: SettingsKey, value: Value) -> AppResult<()> {
        let mut values = self.read_for_update()?;
        values.insert(key.as_str().to_string(), value);
        self.write(&values)
    }

    fn delete(&self, key: SettingsKey) -> AppResult<()> {
        let mut values = self.read_for_update()?;
        if values.remove(key.as_str()).is_none() {
            return Ok(());
        }

        self.write(&values)
    }
}
