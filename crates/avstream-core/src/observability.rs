//! Observability: tracing init and the JSONL audit log.
//!
//! Uses `config::ObservabilityConfig` for AVSTREAM_QUIET, LOG_LEVEL, AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

static AUDIT_PATH: Mutex<Option<String>> = Mutex::new(None);

/// Initialize tracing. Call at process startup.
/// When AVSTREAM_QUIET=1, only WARN and above are logged.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let level: String = if cfg.quiet {
        "avstream=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

fn get_audit_path() -> Option<String> {
    {
        let guard = AUDIT_PATH.lock().ok()?;
        if let Some(ref p) = *guard {
            return Some(p.clone());
        }
    }
    let path = crate::config::ObservabilityConfig::from_env().audit_log.clone()?;
    if path.is_empty() {
        return None;
    }
    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    {
        let mut guard = AUDIT_PATH.lock().ok()?;
        *guard = Some(path.clone());
    }
    Some(path)
}

fn append_jsonl(path: &str, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

fn ts() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Audit: setup_started — before interpreter probe.
pub fn audit_setup_started(venv_dir: &str, requirements: &str) {
    if let Some(path) = get_audit_path() {
        let record = json!({
            "ts": ts(),
            "event": "setup_started",
            "venv_dir": venv_dir,
            "requirements": requirements,
        });
        append_jsonl(&path, &record);
    }
}

/// Audit: env_created — after `python -m venv` succeeded.
pub fn audit_env_created(venv_dir: &str, python: &str) {
    if let Some(path) = get_audit_path() {
        let record = json!({
            "ts": ts(),
            "event": "env_created",
            "venv_dir": venv_dir,
            "python": python,
        });
        append_jsonl(&path, &record);
    }
}

/// Audit: install_completed — after pip finished (any outcome).
pub fn audit_install_completed(venv_dir: &str, exit_code: i32, duration_ms: u64) {
    if let Some(path) = get_audit_path() {
        let record = json!({
            "ts": ts(),
            "event": "install_completed",
            "venv_dir": venv_dir,
            "exit_code": exit_code,
            "duration_ms": duration_ms,
            "success": exit_code == 0,
        });
        append_jsonl(&path, &record);
    }
}

/// Audit: launch_started — right before spawning the entry point.
pub fn audit_launch_started(entry_point: &str, python: &str) {
    if let Some(path) = get_audit_path() {
        let record = json!({
            "ts": ts(),
            "event": "launch_started",
            "entry_point": entry_point,
            "python": python,
        });
        append_jsonl(&path, &record);
    }
}

/// Audit: launch_completed — the entry point exited.
pub fn audit_launch_completed(entry_point: &str, exit_code: i32, duration_ms: u64) {
    if let Some(path) = get_audit_path() {
        let record = json!({
            "ts": ts(),
            "event": "launch_completed",
            "entry_point": entry_point,
            "exit_code": exit_code,
            "duration_ms": duration_ms,
            "success": exit_code == 0,
        });
        append_jsonl(&path, &record);
    }
}
