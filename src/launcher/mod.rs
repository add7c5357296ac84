//! Program launcher.
//!
//! Lists the programs that sit next to the launcher (or in a chosen
//! directory), asks for a number, and runs the chosen one as a child
//! process, waiting for it to finish.

pub mod discovery;
pub mod menu;

pub use discovery::{discover, display_name};
pub use menu::{parse_selection, prompt_selection, write_menu, Selection, SelectionError};

use crate::config::LauncherConfig;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// How a launcher run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    NoCandidates,
    Exited,
    Ran(PathBuf),
}

/// Run `path`, through `interpreter` when given, and wait for it.
pub fn run_candidate(path: &Path, interpreter: Option<&str>) -> Result<ExitStatus> {
    let mut command = match interpreter {
        Some(program) => {
            let mut c = Command::new(program);
            c.arg(path);
            c
        }
        None => Command::new(path),
    };

    log::info!("running {:?}", command);
    let status = command.status().map_err(|source| Error::Spawn {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("{} finished with {}", path.display(), status);
    Ok(status)
}

/// Full launcher flow over arbitrary input and output streams.
///
/// `dir` is searched for candidates, skipping `self_name`. A child that
/// fails to start or exits unsuccessfully is returned as an error so the
/// caller can report it and pick an exit code.
pub fn run<R: BufRead, W: Write>(
    config: &LauncherConfig,
    dir: &Path,
    self_name: Option<&OsStr>,
    input: &mut R,
    out: &mut W,
) -> Result<LaunchOutcome> {
    let candidates = discover(dir, self_name, config.extension.as_deref())?;
    if candidates.is_empty() {
        writeln!(out, "No other programs found in {}.", dir.display())?;
        return Ok(LaunchOutcome::NoCandidates);
    }

    write_menu(out, &candidates)?;
    let index = match prompt_selection(input, out, candidates.len())? {
        Selection::Exit => {
            writeln!(out, "Exiting...")?;
            return Ok(LaunchOutcome::Exited);
        }
        Selection::Run(index) => index,
    };

    let chosen = &candidates[index];
    writeln!(out, "Running {}...", display_name(chosen))?;
    out.flush()?;

    let status = run_candidate(chosen, config.interpreter.as_deref())?;
    if !status.success() {
        return Err(Error::ChildFailed {
            path: chosen.clone(),
            code: status.code(),
        });
    }
    Ok(LaunchOutcome::Ran(chosen.clone()))
}
