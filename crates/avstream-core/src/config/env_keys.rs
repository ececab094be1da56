//! Environment variable key constants.

/// Bootstrap paths and interpreter selection.
pub mod project {
    /// Explicit Python interpreter path (skips PATH lookup).
    pub const AVSTREAM_PYTHON: &str = "AVSTREAM_PYTHON";
    /// Virtual environment directory (default: `venv`).
    pub const AVSTREAM_VENV_DIR: &str = "AVSTREAM_VENV_DIR";
    /// Dependency manifest (default: `requirements.txt`).
    pub const AVSTREAM_REQUIREMENTS: &str = "AVSTREAM_REQUIREMENTS";
    /// Program to launch (default: `src/main.py`).
    pub const AVSTREAM_ENTRY_POINT: &str = "AVSTREAM_ENTRY_POINT";
}

/// Logging and audit.
pub mod observability {
    pub const AVSTREAM_QUIET: &str = "AVSTREAM_QUIET";
    pub const AVSTREAM_LOG_LEVEL: &str = "AVSTREAM_LOG_LEVEL";
    pub const AVSTREAM_LOG_JSON: &str = "AVSTREAM_LOG_JSON";
    pub const AVSTREAM_AUDIT_LOG: &str = "AVSTREAM_AUDIT_LOG";
}
