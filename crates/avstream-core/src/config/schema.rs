//! Config structs grouped by concern, loaded from environment variables.

use std::path::PathBuf;

use super::env_keys::{observability as obv_keys, project as project_keys};
use super::loader::{env_bool, env_optional, env_or, load_dotenv};

/// Bootstrap paths: interpreter override, venv directory, manifest, entry point.
///
/// Resolution order for each field: CLI flag (applied by the caller via the
/// `with_*` overrides) > environment variable > default.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Explicit interpreter path; `None` means auto-detect from PATH.
    pub python: Option<PathBuf>,
    /// Virtual environment directory, relative to the working directory.
    pub venv_dir: PathBuf,
    /// Dependency manifest consumed by `pip install -r`.
    pub requirements: PathBuf,
    /// Program executed by `run`.
    pub entry_point: PathBuf,
}

impl ProjectConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            python: env_optional(project_keys::AVSTREAM_PYTHON).map(PathBuf::from),
            venv_dir: PathBuf::from(env_or(project_keys::AVSTREAM_VENV_DIR, || {
                "venv".to_string()
            })),
            requirements: PathBuf::from(env_or(project_keys::AVSTREAM_REQUIREMENTS, || {
                "requirements.txt".to_string()
            })),
            entry_point: PathBuf::from(env_or(project_keys::AVSTREAM_ENTRY_POINT, || {
                "src/main.py".to_string()
            })),
        }
    }

    /// Apply CLI overrides on top of env/defaults.
    pub fn with_overrides(
        mut self,
        python: Option<String>,
        venv_dir: Option<String>,
        requirements: Option<String>,
        entry_point: Option<String>,
    ) -> Self {
        if let Some(p) = python {
            self.python = Some(PathBuf::from(p));
        }
        if let Some(d) = venv_dir {
            self.venv_dir = PathBuf::from(d);
        }
        if let Some(r) = requirements {
            self.requirements = PathBuf::from(r);
        }
        if let Some(e) = entry_point {
            self.entry_point = PathBuf::from(e);
        }
        self
    }
}

/// Observability config: quiet, log_level, log_json, audit_log.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            load_dotenv();
            Self {
                quiet: env_bool(obv_keys::AVSTREAM_QUIET, false),
                log_level: env_or(obv_keys::AVSTREAM_LOG_LEVEL, || {
                    "avstream=info".to_string()
                }),
                log_json: env_bool(obv_keys::AVSTREAM_LOG_JSON, false),
                audit_log: env_optional(obv_keys::AVSTREAM_AUDIT_LOG),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_config_defaults() {
        let cfg = ProjectConfig {
            python: None,
            venv_dir: PathBuf::from("venv"),
            requirements: PathBuf::from("requirements.txt"),
            entry_point: PathBuf::from("src/main.py"),
        };
        let cfg = cfg.with_overrides(None, None, None, None);
        assert_eq!(cfg.venv_dir, PathBuf::from("venv"));
        assert_eq!(cfg.entry_point, PathBuf::from("src/main.py"));
    }

    #[test]
    fn test_project_config_cli_overrides_win() {
        let cfg = ProjectConfig {
            python: None,
            venv_dir: PathBuf::from("venv"),
            requirements: PathBuf::from("requirements.txt"),
            entry_point: PathBuf::from("src/main.py"),
        };
        let cfg = cfg.with_overrides(
            Some("/opt/python3.11/bin/python3".to_string()),
            Some(".venv".to_string()),
            None,
            Some("main.py".to_string()),
        );
        assert_eq!(cfg.python, Some(PathBuf::from("/opt/python3.11/bin/python3")));
        assert_eq!(cfg.venv_dir, PathBuf::from(".venv"));
        assert_eq!(cfg.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(cfg.entry_point, PathBuf::from("main.py"));
    }
}
