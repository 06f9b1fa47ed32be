use std::path::PathBuf;

use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::Identity;

#[derive(Debug, Serialize)]
pub struct StartReport {
    pub profile: String,
    pub path: Option<PathBuf>,
    pub settings: PathBuf,
}

pub fn run(ctx: &mut AppContext) -> AppResult<()> {
    let Identity::Active(profile) = ctx.manager.resolve()? else {
        return Ok(());
    };

    let report = StartReport {
        path: ctx.manager.profile_dir(&profile),
        settings: ctx.paths.settings_file(),
        profile,
    };

    let text = match report.path.as_ref() {
        Some(path) => format!("{} ({})", report.profile, path.display()),
        None => report.profile.clone(),
    };
    ctx.output.emit(&text, &report)
}
