use std::path::PathBuf;

use crate::config::{self, AppPaths, FileSettingsStore};
use crate::error::AppResult;
use crate::output::Output;
use crate::profile::{ProcessRestarter, ProfileManager};

pub type Manager = ProfileManager<FileSettingsStore, FileSettingsStore, ProcessRestarter>;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: AppPaths,
    pub manager: Manager,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(root: Option<PathBuf>, json: bool, verbose: u8) -> AppResult<Self> {
        let paths = match root.as_deref() {
            Some(root) => AppPaths::from_root(root)?,
            None => AppPaths::discover()?,
        };
        let restarter = ProcessRestarter::current(root.as_deref(), json, verbose)?;
        let manager = ProfileManager::new(
            config::settings_store(&paths),
            config::bootstrap_store(&paths),
            restarter,
            paths.profiles_dir(),
        );
        let output = Output::new(json);

        Ok(Self {
            verbose,
            paths,
            manager,
            output,
        })
    }
}
