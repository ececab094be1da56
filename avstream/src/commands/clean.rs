//! `avstream clean` — remove the virtual environment.
//!
//! The environment is never deleted automatically by setup or run; this is
//! the explicit reset path.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use avstream_core::config::ProjectConfig;

pub fn cmd_clean(cfg: &ProjectConfig, dry_run: bool, force: bool) -> Result<()> {
    let venv_dir = &cfg.venv_dir;

    if !venv_dir.exists() {
        eprintln!("No environment found at {}", venv_dir.display());
        return Ok(());
    }

    let size = dir_size(venv_dir);
    eprintln!(
        "🗂  Environment at {} ({})",
        venv_dir.display(),
        format_size(size)
    );

    if dry_run {
        eprintln!();
        eprintln!("(Dry run — nothing removed. Remove --dry-run to delete.)");
        return Ok(());
    }

    if !force {
        eprint!("\nRemove the environment? [y/N] ");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    fs::remove_dir_all(venv_dir)
        .with_context(|| format!("Remove {}", venv_dir.display()))?;
    eprintln!("✓ Removed {} — freed {}", venv_dir.display(), format_size(size));
    Ok(())
}

/// Compute total size of a directory recursively.
fn dir_size(path: &Path) -> u64 {
    let mut total: u64 = 0;
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_dir() {
                total += dir_size(&p);
            } else if let Ok(meta) = p.metadata() {
                total += meta.len();
            }
        }
    }
    total
}

/// Format byte size to human-readable string.
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_dir_size_counts_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();
        fs::write(dir.path().join("lib").join("a.py"), "x = 1\n").unwrap();
        assert!(dir_size(dir.path()) > 0);
    }

    #[test]
    fn test_clean_on_missing_env_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ProjectConfig {
            python: None,
            venv_dir: dir.path().join("venv"),
            requirements: PathBuf::from("requirements.txt"),
            entry_point: PathBuf::from("src/main.py"),
        };
        cmd_clean(&cfg, false, true).unwrap();
    }

    #[test]
    fn test_clean_force_removes_env() {
        let dir = tempfile::tempdir().unwrap();
        let venv = dir.path().join("venv");
        fs::create_dir_all(venv.join("bin")).unwrap();
        fs::write(venv.join("bin").join("python"), "").unwrap();
        let cfg = ProjectConfig {
            python: None,
            venv_dir: venv.clone(),
            requirements: PathBuf::from("requirements.txt"),
            entry_point: PathBuf::from("src/main.py"),
        };
        cmd_clean(&cfg, false, true).unwrap();
        assert!(!venv.exists());
    }
}
