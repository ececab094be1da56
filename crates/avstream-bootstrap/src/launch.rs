//! Entry-point launch.
//!
//! Runs the stream program in the foreground with the environment's own
//! interpreter, inheriting stdin/stdout/stderr. No retry, no timeout, no
//! supervision: the launcher's exit status is the program's exit status.

use std::path::Path;
use std::process::Command;
use std::time::Instant;

use anyhow::{Context, Result};
use avstream_core::observability;
use thiserror::Error;

use crate::venv;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("virtual environment not found at {venv_dir} — run `avstream setup` first")]
    EnvMissing { venv_dir: String },
    #[error("entry point not found: {entry_point}")]
    EntryPointMissing { entry_point: String },
}

/// Launch `<venv python> <entry_point> [args…]` and wait for it.
///
/// Activation is expressed on the child process: `VIRTUAL_ENV` is set and
/// the environment's bin directory is prepended to `PATH`, so subprocesses
/// of the entry point resolve the venv interpreter too.
///
/// Returns the entry point's exit code. A signal death (no code) maps to 1.
pub fn launch(venv_dir: &Path, entry_point: &Path, args: &[String]) -> Result<i32> {
    let python = venv::python_in(venv_dir).ok_or_else(|| LaunchError::EnvMissing {
        venv_dir: venv_dir.display().to_string(),
    })?;

    if !entry_point.exists() {
        return Err(LaunchError::EntryPointMissing {
            entry_point: entry_point.display().to_string(),
        }
        .into());
    }

    let mut cmd = Command::new(&python);
    cmd.arg(entry_point).args(args);
    apply_activation(&mut cmd, venv_dir);

    tracing::info!(
        python = %python.display(),
        entry_point = %entry_point.display(),
        "Launching stream entry point"
    );
    observability::audit_launch_started(
        &entry_point.to_string_lossy(),
        &python.to_string_lossy(),
    );

    let start = Instant::now();
    let status = cmd
        .status()
        .with_context(|| format!("Spawn {}", python.display()))?;
    let code = status.code().unwrap_or(1);

    observability::audit_launch_completed(
        &entry_point.to_string_lossy(),
        code,
        start.elapsed().as_millis() as u64,
    );
    Ok(code)
}

/// Mirror what `bin/activate` would do for the child process.
fn apply_activation(cmd: &mut Command, venv_dir: &Path) {
    cmd.env("VIRTUAL_ENV", venv_dir);
    let bin_dir = if cfg!(windows) {
        venv_dir.join("Scripts")
    } else {
        venv_dir.join("bin")
    };
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![bin_dir];
    paths.extend(std::env::split_paths(&path_var));
    if let Ok(joined) = std::env::join_paths(paths) {
        cmd.env("PATH", joined);
    }
}
