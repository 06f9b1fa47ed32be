#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use profman::config::{self, AppPaths, FileSettingsStore, SettingsKey, SettingsStore};
use profman::error::{AppError, AppResult};
use profman::profile::{ProfileManager, Restarter};
use serde_json::Value;
use tempfile::TempDir;

pub type TestManager = ProfileManager<FileSettingsStore, FileSettingsStore, RecordingRestarter>;

#[derive(Debug, Default)]
pub struct RecordingRestarter {
    count: Cell<usize>,
}

impl RecordingRestarter {
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl Restarter for RecordingRestarter {
    fn restart(&self) -> AppResult<()> {
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}

/// Delegates to a file store but refuses saves, either of one key or of all keys.
#[derive(Debug)]
pub struct FailingStore {
    inner: FileSettingsStore,
    key: Option<SettingsKey>,
}

impl FailingStore {
    pub fn every_save(inner: FileSettingsStore) -> Self {
        Self { inner, key: None }
    }

    pub fn save_of(inner: FileSettingsStore, key: SettingsKey) -> Self {
        Self {
            inner,
            key: Some(key),
        }
    }
}

impl SettingsStore for FailingStore {
    fn get(&self, key: SettingsKey) -> AppResult<Option<Value>> {
        self.inner.get(key)
    }

    fn save(&self, key: SettingsKey, value: Value) -> AppResult<()> {
        if self.key.is_none_or(|failing| failing == key) {
            return Err(AppError::Settings(format!("{} is read-only", key.as_str())));
        }
        self.inner.save(key, value)
    }

    fn delete(&self, key: SettingsKey) -> AppResult<()> {
        self.inner.delete(key)
    }
}

pub struct Fixture {
    _dir: TempDir,
    pub paths: AppPaths,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::from_root(dir.path()).expect("paths");
        Self { _dir: dir, paths }
    }

    /// A manager as a freshly started process would see it.
    pub fn manager(&self) -> TestManager {
        ProfileManager::new(
            self.settings(),
            self.bootstrap(),
            RecordingRestarter::default(),
            self.paths.profiles_dir(),
        )
    }

    pub fn manager_with<S: SettingsStore>(
        &self,
        settings: S,
    ) -> ProfileManager<S, FileSettingsStore, RecordingRestarter> {
        ProfileManager::new(
            settings,
            self.bootstrap(),
            RecordingRestarter::default(),
            self.paths.profiles_dir(),
        )
    }

    pub fn settings(&self) -> FileSettingsStore {
        config::settings_store(&self.paths)
    }

    pub fn bootstrap(&self) -> FileSettingsStore {
        config::bootstrap_store(&self.paths)
    }

    pub fn seed(&self, active: &[&str], logged_in: Option<&str>) {
        let active: Vec<String> = active.iter().map(|id| id.to_string()).collect();
        let settings = self.settings();
        settings
            .save_list(SettingsKey::ActiveProfiles, &active)
            .expect("seed active profiles");
        if let Some(id) = logged_in {
            settings
                .save_string(SettingsKey::LoggedInProfile, id)
                .expect("seed logged in profile");
        }
    }

    pub fn active(&self) -> Vec<String> {
        self.settings()
            .get_list(SettingsKey::ActiveProfiles)
            .expect("read active profiles")
            .unwrap_or_default()
    }

    pub fn logged_in(&self) -> Option<String> {
        self.settings()
            .get_string(SettingsKey::LoggedInProfile)
            .expect("read logged in profile")
    }

    pub fn marker(&self, key: SettingsKey) -> Option<String> {
        self.settings().get_string(key).expect("read marker")
    }

    pub fn profile_dir(&self, id: &str) -> PathBuf {
        self.paths.profiles_dir().join(id)
    }

    /// Writes a file into a profile, which is what brings its directory into existence.
    pub fn touch(&self, id: &str, name: &str) -> PathBuf {
        let dir = self.profile_dir(id);
        fs::create_dir_all(&dir).expect("create profile dir");
        let path = dir.join(name);
        fs::write(&path, id).expect("write profile file");
        path
    }

    pub fn settings_bytes(&self) -> Option<Vec<u8>> {
        fs::read(self.paths.settings_file()).ok()
    }
}
