use crate::config::{SettingsKey, SettingsStore};
use crate::error::AppResult;

use super::identity::Identity;
use super::manager::ProfileManager;
use super::naming::{self, DEFAULT_PROFILE_ID};
use super::restart::Restarter;

impl<S, B, R> ProfileManager<S, B, R>
where
    S: SettingsStore,
    B: SettingsStore,
    R: Restarter,
{
    /// Registers a new profile, logs into it and restarts.
    ///
    /// The profile directory is not created here; it appears the first time
    /// something writes beneath it.
    pub fn create(&mut self, requested: Option<&str>) -> AppResult<String> {
        let base = requested
            .map(naming::sanitize_profile_id)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_string());

        let mut profiles = self.active_profiles();
        let id = naming::resolve_collision(&base, &profiles);
        profiles.push(id.clone());

        self.settings.save_list(SettingsKey::ActiveProfiles, &profiles)?;
        self.settings.save_string(SettingsKey::LoggedInProfile, &id)?;
        tracing::info!(profile = %id, "created profile");

        self.forget_identity();
        self.restarter.restart()?;
        Ok(id)
    }

    /// Logs into `id` and restarts. Membership in `ActiveProfiles` is not checked.
    pub fn switch(&mut self, id: &str) -> AppResult<()> {
        self.settings.save_string(SettingsKey::LoggedInProfile, id)?;
        tracing::info!(profile = %id, "switched profile");

        self.forget_identity();
        self.restarter.restart()
    }

    /// Records a rename of the active profile to be applied on the next start.
    ///
    /// Returns the collision-free target, or `None` when the request was
    /// rejected or identity resolution already restarted.
    pub fn request_rename(&mut self, new_id: &str) -> AppResult<Option<String>> {
        let Some(current) = self.resolve()?.into_active() else {
            return Ok(None);
        };

        let base = naming::sanitize_profile_id(new_id);
        if base.is_empty() {
            tracing::warn!(
                profile = %current,
                requested = %new_id,
                "rejected rename to an unusable name"
            );
            return Ok(None);
        }

        let profiles = self.active_profiles();
        let target = naming::resolve_collision(&base, &profiles);

        self.settings.save_string(SettingsKey::RenameProfile, &target)?;
        tracing::info!(profile = %current, target = %target, "rename requested");

        self.restarter.restart()?;
        Ok(Some(target))
    }

    /// Marks the active profile for deletion on the next start and restarts.
    pub fn request_delete(&mut self) -> AppResult<Option<String>> {
        let Identity::Active(current) = self.resolve()? else {
            return Ok(None);
        };

        self.settings.save_string(SettingsKey::DeleteProfile, &current)?;
        tracing::info!(profile = %current, "delete requested");

        self.restarter.restart()?;
        Ok(Some(current))
    }
}
