use serde::Serialize;

use crate::config::SettingsStore;
use crate::error::{AppError, AppResult};
use crate::profile::{Identity, ProfileManager, ProfileSummary, Restarter};

/// A named request coming from the UI layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Request {
    GetActiveProfile,
    CreateProfile { name: Option<String> },
    SwitchProfile { id: String },
    RenameProfile { name: String },
    DeleteProfile,
    ListProfiles,
}

impl Request {
    pub fn parse(name: &str, arg: Option<String>) -> AppResult<Self> {
        let request = match name {
            "get-active-profile" => Request::GetActiveProfile,
            "create-profile" => Request::CreateProfile { name: arg },
            "switch-profile" => Request::SwitchProfile {
                id: required(name, arg)?,
            },
            "rename-profile" => Request::RenameProfile {
                name: required(name, arg)?,
            },
            "delete-profile" => Request::DeleteProfile,
            "list-profiles" => Request::ListProfiles,
            other => {
                return Err(AppError::InvalidInput(format!("unknown request `{other}`")));
            }
        };

        Ok(request)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Request::GetActiveProfile => "get-active-profile",
            Request::CreateProfile { .. } => "create-profile",
            Request::SwitchProfile { .. } => "switch-profile",
            Request::RenameProfile { .. } => "rename-profile",
            Request::DeleteProfile => "delete-profile",
            Request::ListProfiles => "list-profiles",
        }
    }
}

fn required(name: &str, arg: Option<String>) -> AppResult<String> {
    arg.ok_or_else(|| AppError::InvalidInput(format!("`{name}` requires an argument")))
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Active { profile: String },
    Restarting { request: &'static str },
    Rejected { request: &'static str, reason: String },
    Profiles { profiles: Vec<ProfileSummary> },
}

pub fn dispatch<S, B, R>(
    manager: &mut ProfileManager<S, B, R>,
    request: Request,
) -> AppResult<Response>
where
    S: SettingsStore,
    B: SettingsStore,
    R: Restarter,
{
    let name = request.name();
    tracing::debug!(request = name, "dispatching request");

    let restarting = Response::Restarting { request: name };
    let response = match request {
        Request::GetActiveProfile => match manager.resolve()? {
            Identity::Active(profile) => Response::Active { profile },
            Identity::Restarting => restarting,
        },
        Request::CreateProfile { name } => {
            manager.create(name.as_deref())?;
            restarting
        }
        Request::SwitchProfile { id } => {
            manager.switch(&id)?;
            restarting
        }
        Request::RenameProfile { name: new_name } => match manager.request_rename(&new_name)? {
            Some(_) => restarting,
            None if manager.is_resolved() => Response::Rejected {
                request: name,
                reason: format!("`{new_name}` is not a usable profile name"),
            },
            None => restarting,
        },
        Request::DeleteProfile => {
            manager.request_delete()?;
            restarting
        }
        Request::ListProfiles => Response::Profiles {
            profiles: manager.list_profiles(),
        },
    };

    Ok(response)
}
