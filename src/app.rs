use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        root,
        json,
        verbose,
        command,
    } = cli;

    let mut ctx = AppContext::bootstrap(root, json, verbose)?;

    // Every invocation is a cold start; nothing may touch profile files before this.
    ctx.manager.apply_pending();

    match command {
        Command::Start => commands::start::run(&mut ctx),
        other => commands::request::run(&mut ctx, other.into_request()?),
    }
}
