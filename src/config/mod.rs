pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{FileSettingsStore, SettingsKey, SettingsStore};

pub fn settings_store(paths: &AppPaths) -> FileSettingsStore {
    FileSettingsStore::new(paths.settings_file())
}

pub fn bootstrap_store(paths: &AppPaths) -> FileSettingsStore {
    FileSettingsStore::new(paths.bootstrap_file())
}
