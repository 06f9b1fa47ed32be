use crate::config::{SettingsKey, SettingsStore};
use crate::error::AppResult;

use super::manager::ProfileManager;
use super::restart::Restarter;

/// Outcome of resolving the active profile.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Identity {
    Active(String),
    /// A profile was selected or created and a restart was triggered.
    Restarting,
}

impl Identity {
    pub fn into_active(self) -> Option<String> {
        match self {
            Identity::Active(id) => Some(id),
            Identity::Restarting => None,
        }
    }
}

impl<S, B, R> ProfileManager<S, B, R>
where
    S: SettingsStore,
    B: SettingsStore,
    R: Restarter,
{
    /// Resolves the logged-in profile, bootstrapping one when none is selected.
    pub fn resolve(&mut self) -> AppResult<Identity> {
        if let Some(id) = &self.active {
            return Ok(Identity::Active(id.clone()));
        }

        match self.settings.get_string(SettingsKey::LoggedInProfile) {
            Ok(Some(id)) if !id.is_empty() => {
                tracing::debug!(profile = %id, "resolved logged in profile");
                self.active = Some(id.clone());
                return Ok(Identity::Active(id));
            }
            Ok(_) => match self.bootstrap_profiles() {
                Ok(Some(profiles)) => return self.adopt_bootstrap(profiles),
                Ok(None) => tracing::debug!("no bootstrap profiles found"),
                Err(err) => tracing::warn!(%err, "unable to read bootstrap profiles"),
            },
            Err(err) => tracing::warn!(%err, "unable to read logged in profile"),
        }

        self.create(None)?;
        Ok(Identity::Restarting)
    }

    fn bootstrap_profiles(&self) -> AppResult<Option<Vec<String>>> {
        let profiles = self.bootstrap.get_list(SettingsKey::ActiveProfiles)?;
        Ok(profiles.filter(|list| list.iter().any(|id| !id.is_empty())))
    }

    fn adopt_bootstrap(&mut self, profiles: Vec<String>) -> AppResult<Identity> {
        let mut adopted: Vec<String> = Vec::with_capacity(profiles.len());
        for id in profiles {
            if !id.is_empty() && !adopted.contains(&id) {
                adopted.push(id);
            }
        }
        let Some(first) = adopted.first().cloned() else {
            self.create(None)?;
            return Ok(Identity::Restarting);
        };
        tracing::info!(profile = %first, "adopting bootstrap profile");

        let mut known = self.active_profiles();
        let before = known.len();
        for id in adopted {
            if !known.contains(&id) {
                known.push(id);
            }
        }
        if known.len() != before {
            self.settings.save_list(SettingsKey::ActiveProfiles, &known)?;
        }
        self.settings.save_string(SettingsKey::LoggedInProfile, &first)?;
        self.bootstrap.delete(SettingsKey::ActiveProfiles)?;

        self.forget_identity();
        self.restarter.restart()?;
        Ok(Identity::Restarting)
    }
}
