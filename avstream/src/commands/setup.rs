//! `avstream setup` — interpreter check, venv creation, dependency install.

use anyhow::Result;
use avstream_bootstrap::{interpreter, venv};
use avstream_bootstrap::venv::SetupOutcome;
use avstream_core::config::ProjectConfig;
use avstream_core::observability;

/// Returns the process exit code: 1 when no usable interpreter is found
/// (before any filesystem writes), 0 on success. Other failures propagate
/// as errors.
pub fn cmd_setup(cfg: &ProjectConfig, force: bool) -> Result<i32> {
    observability::audit_setup_started(
        &cfg.venv_dir.to_string_lossy(),
        &cfg.requirements.to_string_lossy(),
    );

    eprintln!("🔎 Checking for Python...");
    let interp = match interpreter::find_python(cfg.python.as_deref()) {
        Ok(interp) => interp,
        Err(e) => {
            report_missing_interpreter(&e);
            #[cfg(windows)]
            pause_for_acknowledgment();
            return Ok(1);
        }
    };
    eprintln!(
        "  ✓ Python {} at {}",
        interp.version_string(),
        interp.path.display()
    );

    match venv::ensure(&interp, &cfg.venv_dir, &cfg.requirements, force)? {
        SetupOutcome::Reused => {
            eprintln!(
                "  ✓ Environment already present at {} (use --force to recreate)",
                cfg.venv_dir.display()
            );
        }
        SetupOutcome::Created => {
            eprintln!("  ✓ Environment created at {}", cfg.venv_dir.display());
            eprintln!("  ✓ Dependencies installed from {}", cfg.requirements.display());
        }
    }

    eprintln!();
    eprintln!("✅ Setup complete. Start the stream with: avstream run");
    Ok(0)
}

fn report_missing_interpreter(err: &interpreter::InterpreterError) {
    eprintln!();
    eprintln!("❌ {}", err);
    eprintln!();
    eprintln!(
        "   Python {}.{} or newer is required.",
        interpreter::MIN_SUPPORTED.0,
        interpreter::MIN_SUPPORTED.1
    );
    eprintln!("   Install it from https://www.python.org/downloads/");
    eprintln!("   (or via your package manager), then re-run `avstream setup`.");
}

/// The Windows batch scripts paused before closing the console window so the
/// diagnostic stayed readable. Preserve that when stdin is a terminal.
#[cfg(windows)]
fn pause_for_acknowledgment() {
    use std::io::{self, BufRead, IsTerminal, Write};
    if io::stdin().is_terminal() {
        eprint!("Press Enter to exit...");
        let _ = io::stderr().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// With no usable interpreter, setup reports exit code 1 and never
    /// touches the filesystem.
    #[test]
    fn test_setup_without_interpreter_exits_1_before_any_writes() {
        let dir = tempfile::tempdir().unwrap();
        let venv = dir.path().join("venv");
        let cfg = ProjectConfig {
            python: Some(dir.path().join("no-such-python")),
            venv_dir: venv.clone(),
            requirements: dir.path().join("requirements.txt"),
            entry_point: PathBuf::from("src/main.py"),
        };

        let code = cmd_setup(&cfg, false).unwrap();
        assert_eq!(code, 1);
        assert!(!venv.exists());
    }
}
