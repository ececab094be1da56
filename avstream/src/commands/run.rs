//! `avstream run` — launch the stream entry point in the foreground.

use anyhow::Result;
use avstream_bootstrap::launch;
use avstream_core::config::ProjectConfig;

/// Returns the entry point's exit code; the process terminates with it.
pub fn cmd_run(cfg: &ProjectConfig, args: &[String]) -> Result<i32> {
    let code = launch::launch(&cfg.venv_dir, &cfg.entry_point, args)?;
    if code != 0 {
        tracing::warn!(exit_code = code, "Stream exited with a non-zero status");
    }
    Ok(code)
}
