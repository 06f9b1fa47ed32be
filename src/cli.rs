use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::error::AppResult;
use crate::gateway::Request;

#[derive(Debug, Parser)]
#[command(name = "profman", version, about = "Manage isolated profiles")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Keep settings and profiles under this directory"
    )]
    pub root: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cold start: apply pending changes and report the active profile.
    Start,
    GetActiveProfile,
    ListProfiles,
    CreateProfile(CreateArgs),
    SwitchProfile(SwitchArgs),
    RenameProfile(RenameArgs),
    DeleteProfile,
    /// Forward a named request, as issued by a UI layer.
    Request(RequestArgs),
}

impl Command {
    pub fn into_request(self) -> AppResult<Request> {
        let request = match self {
            Command::Start | Command::GetActiveProfile => Request::GetActiveProfile,
            Command::ListProfiles => Request::ListProfiles,
            Command::CreateProfile(args) => Request::CreateProfile { name: args.name },
            Command::SwitchProfile(args) => Request::SwitchProfile { id: args.id },
            Command::RenameProfile(args) => Request::RenameProfile { name: args.name },
            Command::DeleteProfile => Request::DeleteProfile,
            Command::Request(args) => return Request::parse(&args.name, args.arg),
        };

        Ok(request)
    }
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(help = "Profile name, defaults to Main")]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct SwitchArgs {
    #[arg(help = "Profile id to log into")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    #[arg(help = "New name for the active profile")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    #[arg(help = "Request name, e.g. rename-profile")]
    pub name: String,
    #[arg(help = "Request argument")]
    pub arg: Option<String>,
}
