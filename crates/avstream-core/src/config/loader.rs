//! Environment variable loading helpers.
//!
//! Keeps the fallback logic in one place so command code never repeats
//! `or_else` chains.

use std::env;

/// Load `.env` from the working directory into the process environment.
/// Already-set variables are never overridden. Runs at most once.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let path = env::current_dir()
            .map(|d| d.join(".env"))
            .unwrap_or_else(|_| std::path::PathBuf::from(".env"));
        let Ok(content) = std::fs::read_to_string(&path) else {
            return;
        };
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, raw)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let mut value = raw.trim();
            // Strip inline comment unless the value is quoted
            if let Some(hash) = value.find('#') {
                let before = value[..hash].trim_end();
                if !before.contains('"') && !before.contains('\'') {
                    value = before;
                }
            }
            if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
                || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
            {
                value = &value[1..value.len() - 1];
            }
            if !key.is_empty() && env::var(key).is_err() {
                env::set_var(key, value);
            }
        }
    });
}

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default)
}

/// Read an environment variable; empty values count as unset.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean environment variable: 0/false/no/off are false,
/// anything else set is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key).ok().as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_when_unset() {
        let v = env_or("AVSTREAM_TEST_UNSET_KEY", || "fallback".to_string());
        assert_eq!(v, "fallback");
    }

    #[test]
    fn test_env_or_reads_set_value() {
        env::set_var("AVSTREAM_TEST_ENV_OR", "venv-custom");
        let v = env_or("AVSTREAM_TEST_ENV_OR", || "fallback".to_string());
        assert_eq!(v, "venv-custom");
        env::remove_var("AVSTREAM_TEST_ENV_OR");
    }

    #[test]
    fn test_env_optional_empty_is_none() {
        env::set_var("AVSTREAM_TEST_ENV_OPT", "  ");
        assert_eq!(env_optional("AVSTREAM_TEST_ENV_OPT"), None);
        env::remove_var("AVSTREAM_TEST_ENV_OPT");
    }

    #[test]
    fn test_env_bool_variants() {
        env::set_var("AVSTREAM_TEST_BOOL_OFF", "off");
        assert!(!env_bool("AVSTREAM_TEST_BOOL_OFF", true));
        env::remove_var("AVSTREAM_TEST_BOOL_OFF");

        env::set_var("AVSTREAM_TEST_BOOL_ON", "1");
        assert!(env_bool("AVSTREAM_TEST_BOOL_ON", false));
        env::remove_var("AVSTREAM_TEST_BOOL_ON");

        assert!(env_bool("AVSTREAM_TEST_BOOL_UNSET", true));
        assert!(!env_bool("AVSTREAM_TEST_BOOL_UNSET", false));
    }
}
