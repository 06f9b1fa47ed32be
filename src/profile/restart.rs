use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{AppError, AppResult};

/// Ends the current process and starts a fresh one.
///
/// A successful restart does not return. Callers treat it as the last
/// statement of whatever operation triggered it.
pub trait Restarter {
    fn restart(&self) -> AppResult<()>;
}

#[derive(Debug, Clone)]
pub struct ProcessRestarter {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessRestarter {
    pub fn new(program: impl Into<PathBuf>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Restarts into the current executable's `start` command.
    pub fn current(root: Option<&Path>, json: bool, verbose: u8) -> AppResult<Self> {
        let program = std::env::current_exe()
            .map_err(|err| AppError::Restart(format!("unable to locate executable: {err}")))?;
        Ok(Self::new(program, restart_args(root, json, verbose)))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl Restarter for ProcessRestarter {
    fn restart(&self) -> AppResult<()> {
        tracing::info!(program = %self.program.display(), "restarting");
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        replace_process(command)
    }
}

#[cfg(unix)]
fn replace_process(mut command: Command) -> AppResult<()> {
    use std::os::unix::process::CommandExt;

    let err = command.exec();
    Err(AppError::Restart(err.to_string()))
}

#[cfg(not(unix))]
fn replace_process(mut command: Command) -> AppResult<()> {
    command
        .spawn()
        .map_err(|err| AppError::Restart(err.to_string()))?;
    std::process::exit(0)
}

fn restart_args(root: Option<&Path>, json: bool, verbose: u8) -> Vec<OsString> {
    let mut args = Vec::new();
    if let Some(root) = root {
        args.push(OsString::from("--root"));
        args.push(root.as_os_str().to_owned());
    }
    if json {
        args.push(OsString::from("--json"));
    }
    if verbose > 0 {
        args.push(OsString::from(format!("-{}", "v".repeat(verbose as usize))));
    }
    args.push(OsString::from("start"));
    args
}
