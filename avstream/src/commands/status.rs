//! `avstream status` — diagnostic report of the bootstrap state.

use anyhow::Result;
use avstream_bootstrap::{interpreter, requirements, venv};
use avstream_core::config::ProjectConfig;
use serde_json::json;

pub fn cmd_status(cfg: &ProjectConfig, json_output: bool) -> Result<()> {
    let interp = interpreter::find_python(cfg.python.as_deref());
    let venv_python = venv::python_in(&cfg.venv_dir);
    let manifest = if cfg.requirements.exists() {
        Some(requirements::load_manifest(&cfg.requirements)?)
    } else {
        None
    };
    let entry_present = cfg.entry_point.exists();

    if json_output {
        let report = json!({
            "python": match &interp {
                Ok(i) => json!({
                    "path": i.path.to_string_lossy(),
                    "version": i.version_string(),
                }),
                Err(e) => json!({ "error": e.to_string() }),
            },
            "venv": {
                "path": cfg.venv_dir.to_string_lossy(),
                "ready": venv_python.is_some(),
                "python": venv_python.as_ref().map(|p| p.to_string_lossy().to_string()),
            },
            "requirements": {
                "path": cfg.requirements.to_string_lossy(),
                "present": manifest.is_some(),
                "packages": manifest.as_ref().map(|m| m.len()),
                "declared": manifest,
            },
            "entry_point": {
                "path": cfg.entry_point.to_string_lossy(),
                "present": entry_present,
            },
            "ready": interp.is_ok() && venv_python.is_some() && entry_present,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    eprintln!("avstream bootstrap status");
    eprintln!();

    match &interp {
        Ok(i) => eprintln!("  ✓ Python {} ({})", i.version_string(), i.path.display()),
        Err(e) => eprintln!("  ✗ Python: {}", e),
    }

    match &venv_python {
        Some(p) => eprintln!(
            "  ✓ Environment {} (interpreter: {})",
            cfg.venv_dir.display(),
            p.display()
        ),
        None => eprintln!(
            "  ✗ Environment {} missing — run `avstream setup`",
            cfg.venv_dir.display()
        ),
    }

    match &manifest {
        Some(reqs) => {
            eprintln!(
                "  ✓ Manifest {} ({} package(s))",
                cfg.requirements.display(),
                reqs.len()
            );
            for r in reqs {
                if r.spec.is_empty() {
                    eprintln!("      • {}", r.name);
                } else {
                    eprintln!("      • {} {}", r.name, r.spec);
                }
            }
        }
        None => eprintln!("  ✗ Manifest {} missing", cfg.requirements.display()),
    }

    if entry_present {
        eprintln!("  ✓ Entry point {}", cfg.entry_point.display());
    } else {
        eprintln!("  ✗ Entry point {} missing", cfg.entry_point.display());
    }

    eprintln!();
    if interp.is_ok() && venv_python.is_some() && entry_present {
        eprintln!("Ready. Start the stream with: avstream run");
    } else {
        eprintln!("Not ready — fix the items marked ✗ above.");
    }

    Ok(())
}
