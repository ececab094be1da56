//! `requirements.txt` parsing.
//!
//! Only used for diagnostics (`status`) and preflight checks; installation
//! always goes through `pip install -r`, never through this parser.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One declared dependency: package name plus its raw version specifier
/// (`==2.31.0`, `>=1.0,<2.0`, or empty for an unpinned requirement).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub spec: String,
}

/// Read and parse a requirements manifest.
pub fn load_manifest(path: &Path) -> Result<Vec<Requirement>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Read {}", path.display()))?;
    Ok(parse_requirements(&content))
}

/// Parse requirements.txt content.
///
/// Skips blank lines, `#` comments, and option lines (`-r`, `-e`, `--flag`).
/// Inline comments are stripped. The version specifier starts at the first
/// comparison operator; everything before it is the package name (extras in
/// brackets stay attached to the name, pip resolves those).
pub fn parse_requirements(content: &str) -> Vec<Requirement> {
    let mut reqs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let line = line.split('#').next().unwrap_or(line).trim();
        if line.is_empty() {
            continue;
        }

        match line.find(|c: char| matches!(c, '=' | '>' | '<' | '~' | '!')) {
            Some(idx) => {
                let name = line[..idx].trim();
                let spec = line[idx..].trim();
                if !name.is_empty() {
                    reqs.push(Requirement {
                        name: name.to_string(),
                        spec: spec.to_string(),
                    });
                }
            }
            None => reqs.push(Requirement {
                name: line.to_string(),
                spec: String::new(),
            }),
        }
    }
    reqs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_pins() {
        let content = "requests==2.31.0\nflask==3.0.0\n";
        let reqs = parse_requirements(content);
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].name, "requests");
        assert_eq!(reqs[0].spec, "==2.31.0");
        assert_eq!(reqs[1].name, "flask");
    }

    #[test]
    fn test_parse_range_operators() {
        let content = "requests>=2.25.0\nflask~=2.0\nnumpy<2.0\n";
        let reqs = parse_requirements(content);
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs[0].spec, ">=2.25.0");
        assert_eq!(reqs[1].spec, "~=2.0");
        assert_eq!(reqs[2].spec, "<2.0");
    }

    #[test]
    fn test_parse_skips_comments_and_flags() {
        let content = "# comment\n-r other.txt\n-e git+https://...\nrequests==1.0\n";
        let reqs = parse_requirements(content);
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].name, "requests");
    }

    #[test]
    fn test_parse_inline_comment() {
        let content = "requests==2.31.0  # HTTP library\n";
        let reqs = parse_requirements(content);
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].spec, "==2.31.0");
    }

    #[test]
    fn test_parse_unpinned() {
        let content = "pyyaml\nsounddevice\n";
        let reqs = parse_requirements(content);
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].name, "pyyaml");
        assert_eq!(reqs[0].spec, "");
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(&dir.path().join("requirements.txt"));
        assert!(err.is_err());
    }

    #[test]
    fn test_load_manifest_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        std::fs::write(&path, "websocket-client==1.6.0\nrequests>=2.25\n").unwrap();
        let reqs = load_manifest(&path).unwrap();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].name, "websocket-client");
    }
}
