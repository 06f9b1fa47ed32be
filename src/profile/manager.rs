use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{SettingsKey, SettingsStore};

use super::naming;
use super::restart::Restarter;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: String,
    pub path: Option<PathBuf>,
    pub logged_in: bool,
    pub exists: bool,
}

/// Owns the profile lifecycle for one process.
///
/// `settings` holds the global keys, `bootstrap` is the legacy store consulted
/// only when no profile has been selected yet. The resolved identity is cached
/// for the lifetime of the manager, which is the lifetime of the process.
#[derive(Debug)]
pub struct ProfileManager<S, B, R> {
    pub(super) settings: S,
    pub(super) bootstrap: B,
    pub(super) restarter: R,
    pub(super) profiles_dir: PathBuf,
    pub(super) active: Option<String>,
}

impl<S, B, R> ProfileManager<S, B, R>
where
    S: SettingsStore,
    B: SettingsStore,
    R: Restarter,
{
    pub fn new(settings: S, bootstrap: B, restarter: R, profiles_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            bootstrap,
            restarter,
            profiles_dir: profiles_dir.into(),
            active: None,
        }
    }

    pub fn restarter(&self) -> &R {
        &self.restarter
    }

    /// Whether the active profile has been resolved in this process.
    pub fn is_resolved(&self) -> bool {
        self.active.is_some()
    }

    pub fn profile_dir(&self, id: &str) -> Option<PathBuf> {
        naming::profile_dir(&self.profiles_dir, id)
    }

    pub fn list_profiles(&self) -> Vec<ProfileSummary> {
        let logged_in = self
            .settings
            .get_string(SettingsKey::LoggedInProfile)
            .ok()
            .flatten();

        self.active_profiles()
            .into_iter()
            .map(|id| {
                let path = self.profile_dir(&id);
                let exists = path.as_deref().is_some_and(Path::is_dir);
                ProfileSummary {
                    logged_in: logged_in.as_deref() == Some(id.as_str()),
                    id,
                    path,
                    exists,
                }
            })
            .collect()
    }

    /// `ActiveProfiles`, with an unreadable or missing list read as empty.
    pub(super) fn active_profiles(&self) -> Vec<String> {
        match self.settings.get_list(SettingsKey::ActiveProfiles) {
            Ok(list) => list.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(%err, "unable to read active profiles, treating as empty");
                Vec::new()
            }
        }
    }

    pub(super) fn forget_identity(&mut self) {
        self.active = None;
    }
}
