use crate::context::AppContext;
use crate::error::AppResult;
use crate::gateway::{self, Request, Response};
use crate::output::OutputMode;

pub fn run(ctx: &mut AppContext, request: Request) -> AppResult<()> {
    let response = gateway::dispatch(&mut ctx.manager, request)?;

    if let Response::Profiles { profiles } = &response {
        if ctx.output.mode() == OutputMode::Text {
            if profiles.is_empty() {
                println!("0 profiles");
                return Ok(());
            }

            for (index, profile) in profiles.iter().enumerate() {
                let marker = if profile.logged_in { "*" } else { " " };
                let state = if profile.exists { "" } else { " (no files yet)" };
                println!("{marker} {}. {}{state}", index + 1, profile.id);
            }

            return Ok(());
        }
    }

    let text = describe(&response);
    ctx.output.emit(&text, &response)
}

fn describe(response: &Response) -> String {
    match response {
        Response::Active { profile } => format!("active profile: {profile}"),
        Response::Restarting { request } => format!("{request}: restarting"),
        Response::Rejected { request, reason } => format!("{request} rejected: {reason}"),
        Response::Profiles { profiles } => format!("{} profiles", profiles.len()),
    }
}
