//! Virtual environment construction.
//!
//! `setup` side of the bootstrap contract: `python -m venv` plus
//! `pip install -r requirements.txt`. Installation runs in the foreground
//! with inherited stdio; pip's own output is the failure report, and a
//! partially populated environment is left in place (no rollback).

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use anyhow::{Context, Result};
use avstream_core::observability;

use crate::interpreter::PythonInterpreter;

/// What `ensure` did with the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Created,
    Reused,
}

/// Resolve the interpreter inside an environment directory:
/// `bin/python` on POSIX, `Scripts\python.exe` on Windows.
pub fn python_in(venv_dir: &Path) -> Option<PathBuf> {
    let bin = venv_dir.join("bin").join("python");
    if bin.exists() {
        return Some(bin);
    }
    let scripts = venv_dir.join("Scripts").join("python.exe");
    if scripts.exists() {
        return Some(scripts);
    }
    None
}

/// True when the environment exists and carries an interpreter.
pub fn is_ready(venv_dir: &Path) -> bool {
    python_in(venv_dir).is_some()
}

/// Resolve the pip executable inside an environment, falling back to
/// `python -m pip` when the shim is missing.
fn pip_command(venv_dir: &Path) -> Option<Command> {
    let pip_bin = venv_dir.join("bin").join("pip");
    if pip_bin.exists() {
        return Some(Command::new(pip_bin));
    }
    let pip_scripts = venv_dir.join("Scripts").join("pip.exe");
    if pip_scripts.exists() {
        return Some(Command::new(pip_scripts));
    }
    let python = python_in(venv_dir)?;
    let mut cmd = Command::new(python);
    cmd.arg("-m").arg("pip");
    Some(cmd)
}

/// Arguments for `python -m venv`. `--clear` empties a stale environment
/// directory first, so a forced setup truly starts from scratch.
fn venv_args(venv_dir: &Path) -> Vec<std::ffi::OsString> {
    vec![
        "-m".into(),
        "venv".into(),
        "--clear".into(),
        venv_dir.as_os_str().to_os_string(),
    ]
}

/// Create (or recreate) the environment with `python -m venv --clear <dir>`.
pub fn create(interpreter: &PythonInterpreter, venv_dir: &Path) -> Result<()> {
    tracing::info!(
        python = %interpreter.path.display(),
        venv = %venv_dir.display(),
        "Creating virtual environment"
    );
    let out = Command::new(&interpreter.path)
        .args(venv_args(venv_dir))
        .output()
        .context("Run python -m venv")?;
    if !out.status.success() {
        anyhow::bail!(
            "venv creation failed: {}",
            String::from_utf8_lossy(&out.stderr)
        );
    }
    observability::audit_env_created(
        &venv_dir.to_string_lossy(),
        &interpreter.path.to_string_lossy(),
    );
    Ok(())
}

/// Install the manifest into the environment. Inherits stdio so pip reports
/// progress and failures directly to the console.
pub fn install_requirements(venv_dir: &Path, manifest: &Path) -> Result<()> {
    if !manifest.exists() {
        anyhow::bail!("requirements manifest not found: {}", manifest.display());
    }

    let mut cmd = pip_command(venv_dir)
        .with_context(|| format!("No interpreter in {}", venv_dir.display()))?;
    cmd.arg("install").arg("-r").arg(manifest);

    tracing::info!(manifest = %manifest.display(), "Installing dependencies");
    let start = Instant::now();
    let status = cmd.status().context("Run pip install")?;
    let code = status.code().unwrap_or(-1);
    observability::audit_install_completed(
        &venv_dir.to_string_lossy(),
        code,
        start.elapsed().as_millis() as u64,
    );
    if !status.success() {
        anyhow::bail!("pip install failed with exit code {}", code);
    }
    Ok(())
}

/// Idempotent setup: reuse a ready environment unless `force`, otherwise
/// create it and install the manifest. Partial failure leaves the directory
/// as pip left it.
pub fn ensure(
    interpreter: &PythonInterpreter,
    venv_dir: &Path,
    manifest: &Path,
    force: bool,
) -> Result<SetupOutcome> {
    if is_ready(venv_dir) && !force {
        tracing::info!(venv = %venv_dir.display(), "Environment already present, reusing");
        return Ok(SetupOutcome::Reused);
    }

    create(interpreter, venv_dir)?;
    install_requirements(venv_dir, manifest)?;
    Ok(SetupOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fake_venv_posix(root: &Path) -> PathBuf {
        let venv = root.join("venv");
        fs::create_dir_all(venv.join("bin")).unwrap();
        fs::write(venv.join("bin").join("python"), "").unwrap();
        venv
    }

    #[test]
    fn test_venv_args_clear_stale_directory() {
        let args = venv_args(Path::new("venv"));
        assert_eq!(args[0], "-m");
        assert_eq!(args[1], "venv");
        assert_eq!(args[2], "--clear");
        assert_eq!(args[3], "venv");
    }

    #[test]
    fn test_python_in_posix_layout() {
        let dir = tempfile::tempdir().unwrap();
        let venv = fake_venv_posix(dir.path());
        let python = python_in(&venv).unwrap();
        assert!(python.ends_with("bin/python"));
        assert!(is_ready(&venv));
    }

    #[test]
    fn test_python_in_windows_layout() {
        let dir = tempfile::tempdir().unwrap();
        let venv = dir.path().join("venv");
        fs::create_dir_all(venv.join("Scripts")).unwrap();
        fs::write(venv.join("Scripts").join("python.exe"), "").unwrap();
        let python = python_in(&venv).unwrap();
        assert!(python.ends_with("Scripts/python.exe") || python.ends_with("Scripts\\python.exe"));
    }

    #[test]
    fn test_missing_env_not_ready() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_ready(&dir.path().join("venv")));
        assert!(python_in(&dir.path().join("venv")).is_none());
    }

    #[test]
    fn test_install_requires_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let venv = fake_venv_posix(dir.path());
        let err = install_requirements(&venv, &dir.path().join("requirements.txt")).unwrap_err();
        assert!(err.to_string().contains("requirements manifest not found"));
    }

    #[test]
    fn test_ensure_reuses_ready_env() {
        let dir = tempfile::tempdir().unwrap();
        let venv = fake_venv_posix(dir.path());
        // Interpreter is never invoked on the reuse path, a dummy is fine.
        let interp = PythonInterpreter {
            path: PathBuf::from("python3"),
            version: (3, 11, 0),
        };
        let outcome = ensure(&interp, &venv, &dir.path().join("requirements.txt"), false).unwrap();
        assert_eq!(outcome, SetupOutcome::Reused);
    }
}
