//! YAML loading for profiles, resolution config, and run requests
//!
//! The only module in this crate that touches the filesystem. Everything it
//! produces is plain pre-parsed data for the pure resolver/evaluator core.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Profile, ResolutionConfig, RunRequest};

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML from '{path}'")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to parse YAML document")]
    Parse {
        #[source]
        source: serde_yaml::Error,
    },
}

pub fn load_profile(path: &Path) -> Result<Profile, LoaderError> {
    load_yaml(path)
}

pub fn parse_profile(input: &str) -> Result<Profile, LoaderError> {
    parse_yaml(input)
}

pub fn load_config(path: &Path) -> Result<ResolutionConfig, LoaderError> {
    load_yaml(path)
}

pub fn parse_config(input: &str) -> Result<ResolutionConfig, LoaderError> {
    parse_yaml(input)
}

pub fn load_request(path: &Path) -> Result<RunRequest, LoaderError> {
    load_yaml(path)
}

pub fn parse_request(input: &str) -> Result<RunRequest, LoaderError> {
    parse_yaml(input)
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, LoaderError> {
    let raw = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| LoaderError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_yaml<T: DeserializeOwned>(input: &str) -> Result<T, LoaderError> {
    serde_yaml::from_str(input).map_err(|source| LoaderError::Parse { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile_reads_rules_in_order() {
        let raw = "rules:\n  - if: \"resolution.dx == null\"\n    raise: \"Missing dx\"\n  - if: \"domain_size <= 0\"\n    raise: \"Empty domain\"\n";
        let profile = parse_profile(raw).expect("profile should parse");
        assert_eq!(profile.rules.len(), 2);
        assert_eq!(profile.rules[0].message, "Missing dx");
        assert_eq!(profile.rules[1].condition, "domain_size <= 0");
    }

    #[test]
    fn parse_config_accepts_partial_defaults() {
        let raw = "default_resolution:\n  dz: 0.75\ndefault_grid_dimensions:\n  nx: 10\n  ny: 20\n";
        let config = parse_config(raw).expect("config should parse");
        assert_eq!(config.default_resolution.dz, Some(0.75));
        assert_eq!(config.default_resolution.dx, None);
        assert_eq!(config.default_grid_dimensions.ny, Some(20));
        assert_eq!(config.default_grid_dimensions.nz, None);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let path = dir.path().join("absent.yaml");
        let error = load_profile(&path).expect_err("missing file should fail");
        assert!(matches!(error, LoaderError::Io { .. }));
    }

    #[test]
    fn load_invalid_yaml_is_yaml_error() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "rules: [not, a, rule, list]").expect("fixture should write");
        let error = load_profile(&path).expect_err("invalid yaml should fail");
        assert!(matches!(error, LoaderError::Yaml { .. }));
    }
}
