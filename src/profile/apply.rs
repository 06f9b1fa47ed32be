use std::fs;
use std::io;

use crate::config::{SettingsKey, SettingsStore};
use crate::error::{AppError, AppResult};

use super::manager::ProfileManager;
use super::restart::Restarter;

impl<S, B, R> ProfileManager<S, B, R>
where
    S: SettingsStore,
    B: SettingsStore,
    R: Restarter,
{
    /// Applies pending rename and delete markers. Must run before anything
    /// opens files under the profiles directory.
    pub fn apply_pending(&mut self) {
        self.apply_rename();
        self.apply_delete();
        self.forget_identity();
    }

    /// Renames the active profile to the pending target, if one was requested.
    pub fn apply_rename(&mut self) {
        let target = match self.settings.get_string(SettingsKey::RenameProfile) {
            Ok(Some(target)) => target,
            Ok(None) => return,
            Err(err) => {
                tracing::error!(%err, "unable to read pending rename");
                self.clear_marker(SettingsKey::RenameProfile);
                return;
            }
        };

        if let Err(err) = self.rename_active(&target) {
            tracing::error!(%err, target = %target, "profile rename aborted");
        }
        self.clear_marker(SettingsKey::RenameProfile);
    }

    /// Removes the profile marked for deletion, if any.
    pub fn apply_delete(&mut self) {
        let id = match self.settings.get_string(SettingsKey::DeleteProfile) {
            Ok(Some(id)) if !id.is_empty() => id,
            Ok(Some(_)) => {
                tracing::warn!("ignoring empty pending delete");
                self.clear_marker(SettingsKey::DeleteProfile);
                return;
            }
            Ok(None) => return,
            Err(err) => {
                tracing::error!(%err, "unable to read pending delete");
                self.clear_marker(SettingsKey::DeleteProfile);
                return;
            }
        };

        if let Err(err) = self.delete_profile(&id) {
            tracing::error!(%err, profile = %id, "profile delete aborted");
        }
        self.clear_marker(SettingsKey::DeleteProfile);
    }

    fn rename_active(&self, target: &str) -> AppResult<()> {
        let current = self
            .settings
            .get_string(SettingsKey::LoggedInProfile)?
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::InvalidInput("no logged in profile to rename".to_string()))?;
        if target.is_empty() {
            return Err(AppError::InvalidInput("empty rename target".to_string()));
        }

        let from = self.profile_dir(&current).ok_or_else(|| {
            AppError::InvalidInput(format!("`{current}` is not a valid profile directory"))
        })?;
        let to = self.profile_dir(target).ok_or_else(|| {
            AppError::InvalidInput(format!("`{target}` is not a valid profile directory"))
        })?;

        // Settings change only once the directory is in place; the move is undone if they cannot.
        if to.exists() {
            let message = format!("{} already exists", to.display());
            return Err(AppError::InvalidInput(message));
        }
        let previous = self
            .settings
            .get_list(SettingsKey::ActiveProfiles)?
            .unwrap_or_default();
        let mut profiles = previous.clone();
        match profiles.iter().position(|id| *id == current) {
            Some(index) => profiles[index] = target.to_string(),
            None => profiles.push(target.to_string()),
        }

        let moved = from.exists();
        if moved {
            fs::rename(&from, &to)?;
        } else {
            tracing::debug!(profile = %current, "no profile directory yet, nothing to move");
        }

        if let Err(err) = self.commit_rename(&profiles, target) {
            if moved {
                if let Err(undo) = fs::rename(&to, &from) {
                    tracing::error!(
                        %undo,
                        path = %to.display(),
                        "unable to move profile directory back"
                    );
                }
            }
            if let Err(undo) = self.settings.save_list(SettingsKey::ActiveProfiles, &previous) {
                tracing::error!(%undo, "unable to restore active profiles");
            }
            return Err(err);
        }

        tracing::info!(from = %current, to = %target, "renamed profile");
        Ok(())
    }

    fn commit_rename(&self, profiles: &[String], target: &str) -> AppResult<()> {
        self.settings.save_list(SettingsKey::ActiveProfiles, profiles)?;
        self.settings.save_string(SettingsKey::LoggedInProfile, target)
    }

    fn delete_profile(&self, id: &str) -> AppResult<()> {
        let mut profiles = self
            .settings
            .get_list(SettingsKey::ActiveProfiles)?
            .unwrap_or_default();

        match self.profile_dir(id) {
            Some(dir) => match fs::remove_dir_all(&dir) {
                Ok(()) => tracing::info!(profile = %id, "removed profile directory"),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => tracing::error!(
                    %err,
                    path = %dir.display(),
                    "unable to remove profile directory"
                ),
            },
            None => tracing::warn!(profile = %id, "refusing to remove a non-profile path"),
        }

        profiles.retain(|known| known != id);
        self.settings.save_list(SettingsKey::ActiveProfiles, &profiles)?;

        match profiles.first() {
            Some(next) => self.settings.save_string(SettingsKey::LoggedInProfile, next)?,
            None => self.settings.delete(SettingsKey::LoggedInProfile)?,
        }

        tracing::info!(profile = %id, remaining = profiles.len(), "deleted profile");
        Ok(())
    }

    fn clear_marker(&self, key: SettingsKey) {
        if let Err(err) = self.settings.delete(key) {
            tracing::error!(%err, key = key.as_str(), "unable to clear pending marker");
        }
    }
}
