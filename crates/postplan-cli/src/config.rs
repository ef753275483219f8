//! CLI config file
//!
//! Optional `~/.postplan/config.toml` with defaults for provider, model and
//! output directory. Resolution order everywhere: CLI flag, then config
//! file, then builtin default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use postplan_core::paths;
use postplan_core::ProviderId;

/// Values read from `config.toml`; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    pub provider: Option<ProviderId>,
    pub model: Option<String>,
    pub out_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load the config file; a missing file is an empty config
    pub fn load() -> Result<Self> {
        Self::load_from_path(&paths::config_file_path())
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(config.provider.is_none());
        assert!(config.model.is_none());
        assert!(config.out_dir.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "provider = \"groq\"\nmodel = \"llama-3.1-8b-instant\"\nout_dir = \"plans\"\n",
        )
        .unwrap();

        let config = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(config.provider, Some(ProviderId::Groq));
        assert_eq!(config.model.as_deref(), Some("llama-3.1-8b-instant"));
        assert_eq!(config.out_dir, Some(PathBuf::from("plans")));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "provider = [not toml").unwrap();
        assert!(CliConfig::load_from_path(&path).is_err());
    }
}
