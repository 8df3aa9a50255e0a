use crate::domain::constants::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_PARAMS_PATH};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsSection,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    #[serde(default = "default_params")]
    pub params: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            params: default_params(),
            output: default_output(),
        }
    }
}

fn default_params() -> PathBuf {
    PathBuf::from(DEFAULT_PARAMS_PATH)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

/// Resolved input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub params: PathBuf,
    pub output: PathBuf,
}

/// Loads `explicit` if given (it must exist), otherwise `pdcgen.toml` in the
/// working directory when present, otherwise built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !p.exists() {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_PATH);
                return Ok(ConfigFile::default());
            }
            p
        }
    };
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let cfg = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Command-line flags win over the config file.
pub fn resolve_paths(
    cfg: &ConfigFile,
    params: Option<&Path>,
    output: Option<&Path>,
) -> RunPaths {
    RunPaths {
        params: params
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cfg.paths.params.clone()),
        output: output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cfg.paths.output.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::{load_config, resolve_paths, ConfigError, ConfigFile};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[test]
    fn partial_config_keeps_other_defaults() {
        let cfg: ConfigFile = toml::from_str("[paths]\nparams = \"build/params.v\"\n").expect("parse");
        assert_eq!(cfg.paths.params, PathBuf::from("build/params.v"));
        assert_eq!(cfg.paths.output, PathBuf::from("eval/constraint.pdc"));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let cfg: ConfigFile = toml::from_str("").expect("parse");
        assert_eq!(cfg, ConfigFile::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConfigFile>("[paths]\nparam = \"x\"\n").is_err());
    }

    #[test]
    fn flags_override_config() {
        let cfg: ConfigFile =
            toml::from_str("[paths]\nparams = \"a.v\"\noutput = \"a.pdc\"\n").expect("parse");
        let paths = resolve_paths(&cfg, None, Some(Path::new("b.pdc")));
        assert_eq!(paths.params, PathBuf::from("a.v"));
        assert_eq!(paths.output, PathBuf::from("b.pdc"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let err = load_config(Some(&tmp.path().join("nope.toml"))).expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn explicit_config_with_bad_toml_is_a_parse_error() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("pdcgen.toml");
        std::fs::write(&path, "[paths\n").expect("write config");
        let err = load_config(Some(&path)).expect_err("bad toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
