//! System Python interpreter detection.
//!
//! Lookup order: explicit override > `python3` on PATH > `python` on PATH.
//! Each candidate is probed with `--version` so we never hand a broken
//! interpreter to `python -m venv`.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Oldest Python the stream application supports.
pub const MIN_SUPPORTED: (u32, u32) = (3, 8);

/// Candidate executable names probed on PATH, in order.
const CANDIDATES: &[&str] = &["python3", "python"];

#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("no Python interpreter found on PATH (tried python3, python)")]
    NotFound,
    #[error("failed to probe {}: {reason}", path.display())]
    ProbeFailed { path: PathBuf, reason: String },
    #[error("{} is Python {found}, but at least {}.{} is required", path.display(), MIN_SUPPORTED.0, MIN_SUPPORTED.1)]
    TooOld { path: PathBuf, found: String },
}

/// A usable system interpreter: resolved path plus probed version.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    pub path: PathBuf,
    pub version: (u32, u32, u32),
}

impl PythonInterpreter {
    pub fn version_string(&self) -> String {
        format!("{}.{}.{}", self.version.0, self.version.1, self.version.2)
    }
}

/// Find a Python >= 3.8 interpreter.
///
/// With an explicit `override_path` the PATH lookup is skipped and that
/// candidate alone is probed; an unusable override is an error, not a
/// fallthrough.
pub fn find_python(override_path: Option<&Path>) -> Result<PythonInterpreter, InterpreterError> {
    if let Some(path) = override_path {
        return probe(path);
    }

    for name in CANDIDATES {
        let Ok(path) = which::which(name) else {
            continue;
        };
        match probe(&path) {
            Ok(interp) => return Ok(interp),
            // python3 resolved but too old: report it rather than silently
            // degrading to an even older `python`
            Err(e @ InterpreterError::TooOld { .. }) => return Err(e),
            Err(_) => continue,
        }
    }

    Err(InterpreterError::NotFound)
}

/// Probe one candidate with `--version` and enforce the version floor.
fn probe(path: &Path) -> Result<PythonInterpreter, InterpreterError> {
    let out = Command::new(path)
        .arg("--version")
        .output()
        .map_err(|e| InterpreterError::ProbeFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if !out.status.success() {
        return Err(InterpreterError::ProbeFailed {
            path: path.to_path_buf(),
            reason: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    // Python 2 printed the version to stderr
    let text = if out.stdout.is_empty() {
        String::from_utf8_lossy(&out.stderr).to_string()
    } else {
        String::from_utf8_lossy(&out.stdout).to_string()
    };

    let version = parse_version(&text).ok_or_else(|| InterpreterError::ProbeFailed {
        path: path.to_path_buf(),
        reason: format!("unrecognized --version output: {}", text.trim()),
    })?;

    if (version.0, version.1) < MIN_SUPPORTED {
        return Err(InterpreterError::TooOld {
            path: path.to_path_buf(),
            found: format!("{}.{}.{}", version.0, version.1, version.2),
        });
    }

    Ok(PythonInterpreter {
        path: path.to_path_buf(),
        version,
    })
}

/// Parse `Python X.Y.Z` (trailing tags like `rc1` or `+` are ignored).
fn parse_version(text: &str) -> Option<(u32, u32, u32)> {
    let rest = text.trim().strip_prefix("Python")?.trim();
    let mut parts = rest.split('.');
    let major: u32 = parts.next()?.trim().parse().ok()?;
    let minor: u32 = parts.next()?.trim().parse().ok()?;
    let patch: u32 = parts
        .next()
        .map(|p| {
            let digits: String = p.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0)
        })
        .unwrap_or(0);
    Some((major, minor, patch))
}
